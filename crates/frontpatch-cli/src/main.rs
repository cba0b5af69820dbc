use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use frontpatch_core::{FrontpatchError, FrontpatchResult, Marker};
use frontpatch_inject::splice;

#[derive(Parser)]
#[command(name = "frontpatch")]
#[command(about = "Patch a docs front page by inserting a snippet before the span5 column")]
struct Cli {
    #[arg(short = 'i', value_name = "PATH", help = "path to the html file to patch")]
    input: PathBuf,

    #[arg(short = 'p', value_name = "PATH", help = "path to the patch snippet file")]
    patch: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontpatch=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&cli.input, &cli.patch, &mut out) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run<W: Write>(input: &Path, patch: &Path, out: &mut W) -> FrontpatchResult<()> {
    let snippet = fs::read_to_string(patch).map_err(|e| FrontpatchError::Open {
        path: patch.display().to_string(),
        source: e,
    })?;
    tracing::debug!("loaded {} byte patch from {}", snippet.len(), patch.display());

    let file = File::open(input).map_err(|e| FrontpatchError::Open {
        path: input.display().to_string(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    let inserted = splice(&snippet, &Marker::front_page(), &mut reader, out)?;
    if !inserted {
        tracing::warn!("marker not found in {}, output unchanged", input.display());
    }
    out.flush()?;

    Ok(())
}
