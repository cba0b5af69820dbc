/// A two-line insertion point: a line equal to `first` followed immediately
/// by a line equal to `second`. Comparison ignores the line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub first: &'static str,
    pub second: &'static str,
}

impl Marker {
    /// The front-page marker: the close of the hero div, immediately
    /// followed by the right-hand column.
    pub const fn front_page() -> Self {
        Self {
            first: "</div>",
            second: "<div class=\"span5\">",
        }
    }

    /// Whether `line` equals this marker's first line, ignoring a trailing
    /// `\n` or `\r\n`.
    pub fn matches_first(&self, line: &str) -> bool {
        strip_terminator(line) == self.first
    }

    /// Whether `line` equals this marker's second line, ignoring a trailing
    /// `\n` or `\r\n`.
    pub fn matches_second(&self, line: &str) -> bool {
        strip_terminator(line) == self.second
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignore_terminator() {
        let marker = Marker::front_page();
        assert!(marker.matches_first("</div>"));
        assert!(marker.matches_first("</div>\n"));
        assert!(marker.matches_first("</div>\r\n"));
        assert!(marker.matches_second("<div class=\"span5\">\n"));
    }

    #[test]
    fn no_match_on_interior_whitespace() {
        let marker = Marker::front_page();
        assert!(!marker.matches_first("  </div>"));
        assert!(!marker.matches_second("<div class=\"span3\">\n"));
    }
}
