//! Shared utility modules used across the autocorrect components.

pub mod levenshtein;
