use crate::domain::{ChatLog, Extraction};
use crate::error::ExtractError;

pub type Result<T> = std::result::Result<T, ExtractError>;

pub trait LogSource {
    // Reads the whole chat history and maps it to a ChatLog
    fn load_log(&self) -> Result<ChatLog>;
}

/// Trait for writing the generated pages
/// This is a port (interface) that defines how the core communicates with output adapters
pub trait PageWriter: Send + Sync {
    fn write_site(&self, log: &ChatLog, extractions: &[Extraction]) -> Result<()>;
}
