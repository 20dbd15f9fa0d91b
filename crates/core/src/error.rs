/// Everything that can stop a generation run. Every variant is fatal: the
/// run aborts at the first error, leaving only pages already flushed.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A raw log line that matches neither accepted shape. The markers make
    /// stray whitespace in the offending line visible.
    #[error("malformed log line: >>>{line}<<<")]
    MalformedLine { line: String },

    /// An extraction pointing outside the loaded log.
    #[error("line {lineno} is out of range (the log has {line_count} lines)")]
    LineOutOfRange { lineno: usize, line_count: usize },

    /// Filesystem trouble: missing input log, unwritable output directory.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
