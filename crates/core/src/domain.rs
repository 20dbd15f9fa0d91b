use crate::error::ExtractError;
use crate::ports::Result;

/// How many lines of surrounding context a quote page shows on each side of
/// its target line.
pub const WINDOW_RADIUS: usize = 20;

/// The loaded chat history: one IRC event per line, in file order.
/// Immutable after loading. Line numbers are 1-indexed throughout, matching
/// how the curated extractions are written down.
#[derive(Debug, Clone)]
pub struct ChatLog {
    lines: Vec<String>,
}

impl ChatLog {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the raw line at the given 1-indexed line number.
    pub fn line(&self, lineno: usize) -> Result<&str> {
        if lineno == 0 || lineno > self.lines.len() {
            return Err(ExtractError::LineOutOfRange {
                lineno,
                line_count: self.lines.len(),
            });
        }
        Ok(&self.lines[lineno - 1])
    }

    /// Returns the target line plus up to [`WINDOW_RADIUS`] raw lines on
    /// each side, clipped at the log boundaries. Never wraps around and
    /// never fails just because fewer context lines exist.
    pub fn window_around(&self, lineno: usize) -> Result<LineWindow<'_>> {
        let target = self.line(lineno)?;
        let idx = lineno - 1;
        let before_start = idx.saturating_sub(WINDOW_RADIUS);
        let after_end = (idx + 1 + WINDOW_RADIUS).min(self.lines.len());
        Ok(LineWindow {
            before: &self.lines[before_start..idx],
            target,
            after: &self.lines[idx + 1..after_end],
        })
    }
}

/// The reading context around one target line: strictly-before lines, the
/// target itself, strictly-after lines.
#[derive(Debug)]
pub struct LineWindow<'a> {
    pub before: &'a [String],
    pub target: &'a str,
    pub after: &'a [String],
}

/// Which of the two accepted line shapes a raw line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A chat message: `<user> message`.
    Says,
    /// A third-person action: `* user message`.
    Action,
}

/// One classified log line. Derived on demand from a raw line, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub kind: LineKind,
    pub timestamp: String, // Raw log text; never parsed as a datetime
    pub user: String,
    pub content: String,
}

/// A curated quote: a 1-indexed line number plus an optional annotation
/// shown next to the highlighted line.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub lineno: usize,
    pub context: Option<String>,
}

impl Extraction {
    pub fn new(lineno: usize, context: Option<String>) -> Self {
        Self { lineno, context }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_log(n: usize) -> ChatLog {
        ChatLog::new((1..=n).map(|i| format!("line {}", i)).collect())
    }

    #[test]
    fn test_line_is_one_indexed() {
        let log = numbered_log(3);
        assert_eq!(log.line(1).unwrap(), "line 1");
        assert_eq!(log.line(3).unwrap(), "line 3");
    }

    #[test]
    fn test_line_zero_is_out_of_range() {
        let log = numbered_log(3);
        assert!(matches!(
            log.line(0),
            Err(ExtractError::LineOutOfRange { lineno: 0, line_count: 3 })
        ));
    }

    #[test]
    fn test_line_past_end_is_out_of_range() {
        let log = numbered_log(3);
        assert!(matches!(
            log.line(4),
            Err(ExtractError::LineOutOfRange { lineno: 4, line_count: 3 })
        ));
    }

    #[test]
    fn test_window_at_first_line_has_empty_before() {
        let log = numbered_log(50);
        let window = log.window_around(1).unwrap();
        assert!(window.before.is_empty());
        assert_eq!(window.target, "line 1");
        assert_eq!(window.after.len(), WINDOW_RADIUS);
        assert_eq!(window.after[0], "line 2");
    }

    #[test]
    fn test_window_at_last_line_has_empty_after() {
        let log = numbered_log(50);
        let window = log.window_around(50).unwrap();
        assert_eq!(window.before.len(), WINDOW_RADIUS);
        assert_eq!(window.before[WINDOW_RADIUS - 1], "line 49");
        assert_eq!(window.target, "line 50");
        assert!(window.after.is_empty());
    }

    #[test]
    fn test_window_clips_short_log_without_error() {
        let log = numbered_log(5);
        let window = log.window_around(3).unwrap();
        assert_eq!(window.before, ["line 1", "line 2"]);
        assert_eq!(window.target, "line 3");
        assert_eq!(window.after, ["line 4", "line 5"]);
    }

    #[test]
    fn test_window_takes_full_radius_when_available() {
        let log = numbered_log(100);
        let window = log.window_around(40).unwrap();
        assert_eq!(window.before.len(), WINDOW_RADIUS);
        assert_eq!(window.before[0], "line 20");
        assert_eq!(window.after.len(), WINDOW_RADIUS);
        assert_eq!(window.after[WINDOW_RADIUS - 1], "line 60");
    }

    #[test]
    fn test_window_out_of_range_is_an_error() {
        let log = numbered_log(5);
        assert!(matches!(
            log.window_around(6),
            Err(ExtractError::LineOutOfRange { lineno: 6, line_count: 5 })
        ));
    }
}
