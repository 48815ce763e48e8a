//! Error types for chatmark.
//!
//! Rendering never fails; these cover the I/O edges (CLI input and output).

use thiserror::Error;

/// Result type for chatmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or writing rendered messages.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be decoded as UTF-8 text.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
