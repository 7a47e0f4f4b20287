//! Error types for sheetdown

use thiserror::Error;

/// Main error type for sheetdown operations
#[derive(Error, Debug)]
pub enum SheetdownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ingest error while decoding a rows payload
    #[error("Ingest error: {0}")]
    Ingest(String),

    /// Render error during output generation
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for sheetdown operations
pub type Result<T> = std::result::Result<T, SheetdownError>;
