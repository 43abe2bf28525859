//! Command Line Interface: corpus flags, REPL loop and output formats.

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
