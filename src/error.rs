//! Error types for the autocorrect crate.
//!
//! Index construction and query-time operations never fail; the errors here
//! come from the outer layers: configuration loading, invocation validation
//! and REPL output.
//!
//! # Examples
//!
//! ```
//! use autocorrect::error::{AutocorrectError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AutocorrectError::usage("--data is required"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for autocorrect operations.
#[derive(Error, Debug)]
pub enum AutocorrectError {
    /// I/O errors (writing suggestions, reading config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The command line could not be turned into a runnable invocation
    #[error("Usage error: {0}")]
    Usage(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with AutocorrectError.
pub type Result<T> = std::result::Result<T, AutocorrectError>;

impl AutocorrectError {
    /// Create a new usage error.
    pub fn usage<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::Usage(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::Config(msg.into())
    }
}
