//! # autocorrect
//!
//! An autocorrect engine for short typed queries, backed by a vocabulary trie.
//!
//! ## Features
//!
//! - Arena-allocated trie with direct-indexed children
//! - Prefix completion of the last word of a query
//! - Splitting a run-together word into two vocabulary words
//! - Bounded Levenshtein search with row-minimum pruning
//! - Line-oriented REPL with human and JSON output

pub mod cli;
pub mod error;
pub mod spelling;
pub mod util;

pub mod prelude {
    pub use crate::error::{AutocorrectError, Result};
    pub use crate::spelling::{Autocorrector, Phrase, SuggestConfig, WordIndex, normalize};
    pub use crate::util::levenshtein::levenshtein_distance;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
