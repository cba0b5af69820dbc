use std::io::{BufRead, Write};

use frontpatch_core::{FrontpatchResult, Marker};

/// Streams `input` to `out`, inserting `patch` immediately before the first
/// occurrence of `marker`. Lines are written with their original terminators
/// so an unpatched document round-trips byte for byte.
///
/// The scan is a single forward pass with one line of lookahead. When a line
/// matches the marker's first half but the lookahead does not complete the
/// pair, both lines are written and the lookahead line is consumed without
/// being re-examined as a new marker start.
///
/// Returns whether an insertion happened.
pub fn splice<R: BufRead, W: Write>(
    patch: &str,
    marker: &Marker,
    input: &mut R,
    out: &mut W,
) -> FrontpatchResult<bool> {
    let mut line = String::new();
    let mut lookahead = String::new();
    let mut inserted = false;

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        if !inserted && marker.matches_first(&line) {
            lookahead.clear();
            if input.read_line(&mut lookahead)? == 0 {
                // marker half on the last line, nothing to pair with
                out.write_all(line.as_bytes())?;
                break;
            }
            if marker.matches_second(&lookahead) {
                tracing::debug!("marker found, inserting {} bytes", patch.len());
                out.write_all(patch.as_bytes())?;
                inserted = true;
            }
            out.write_all(line.as_bytes())?;
            out.write_all(lookahead.as_bytes())?;
        } else {
            out.write_all(line.as_bytes())?;
        }
    }

    Ok(inserted)
}
