//! Canonical text normalization shared by queries and corpus ingestion.
//!
//! Text is lowercased, then every maximal run of `a`-`z` becomes a token.
//! Anything else (digits, punctuation, whitespace, non-ASCII letters) only
//! separates tokens.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN: Regex = Regex::new("[a-z]+").unwrap();
}

/// Split text into lowercase ASCII tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Normalize text into its canonical single-spaced form.
///
/// ```
/// use autocorrect::spelling::normalize;
///
/// assert_eq!(normalize("  Hello,   WORLD!! "), "hello world");
/// assert_eq!(normalize("42 ?!"), "");
/// ```
pub fn normalize(text: &str) -> String {
    tokenize(text).join(" ")
}

/// A normalized query: the tokens of the input in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Phrase {
    tokens: Vec<String>,
}

impl Phrase {
    /// Normalize arbitrary input into a phrase.
    pub fn parse(input: &str) -> Self {
        Phrase {
            tokens: tokenize(input),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token being corrected.
    pub fn last_token(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Every token but the last, space separated. Empty for phrases of
    /// zero or one token.
    pub fn stem(&self) -> String {
        match self.tokens.split_last() {
            Some((_, leading)) => leading.join(" "),
            None => String::new(),
        }
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
