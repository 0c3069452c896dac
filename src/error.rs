//! Error types for the Augur library.
//!
//! All fallible operations in Augur return [`Result`], whose error type is
//! the [`AugurError`] enum.
//!
//! # Examples
//!
//! ```
//! use augur::error::{AugurError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AugurError::corpus("first token of a document must be its label"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Augur operations.
#[derive(Error, Debug)]
pub enum AugurError {
    /// I/O errors (reading training or test corpora)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus-related errors (malformed labeled documents)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Model-related errors (training, vocabulary accumulation)
    #[error("Model error: {0}")]
    Model(String),

    /// Classification-related errors (scoring, evaluation runs)
    #[error("Classify error: {0}")]
    Classify(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with AugurError.
pub type Result<T> = std::result::Result<T, AugurError>;

impl AugurError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        AugurError::Corpus(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        AugurError::Model(msg.into())
    }

    /// Create a new classify error.
    pub fn classify<S: Into<String>>(msg: S) -> Self {
        AugurError::Classify(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        AugurError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        AugurError::Other(msg.into())
    }
}
