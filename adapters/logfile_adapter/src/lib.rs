use quotes_core::domain::ChatLog;
use quotes_core::ports::{LogSource, Result};
use std::fs;

/// Flat-file implementation of the LogSource trait
pub struct FlatFileLogSource {
    log_path: String,
}

impl FlatFileLogSource {
    /// Creates a new FlatFileLogSource reading from the given path
    pub fn new(log_path: String) -> Self {
        Self { log_path }
    }
}

impl LogSource for FlatFileLogSource {
    fn load_log(&self) -> Result<ChatLog> {
        let content = fs::read_to_string(&self.log_path)?;
        let mut lines: Vec<String> = content.split('\n').map(String::from).collect();

        // Exactly one trailing empty element is dropped; a file ending in two
        // newlines keeps one empty line.
        if lines.last().map(|line| line.is_empty()).unwrap_or(false) {
            lines.pop();
        }

        tracing::debug!(path = %self.log_path, lines = lines.len(), "chat log loaded");
        Ok(ChatLog::new(lines))
    }
}
