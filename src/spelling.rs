//! Word index and suggestion generation.
//!
//! This module holds the vocabulary trie, the normalizer shared by queries
//! and corpus ingestion, the corpus reader, and the composer that merges
//! the prefix, split-word and edit-distance generators into one ranked set.

pub mod corpus;
pub mod normalize;
pub mod suggest;
pub mod trie;

// Re-export commonly used types
pub use corpus::*;
pub use normalize::*;
pub use suggest::*;
pub use trie::*;
