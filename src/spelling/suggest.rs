//! Suggestion composition over the word index.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{AutocorrectError, Result};
use crate::spelling::normalize::Phrase;
use crate::spelling::trie::WordIndex;

/// Most suggestions a query can ever produce, and the default cap.
pub const MAX_SUGGESTIONS: usize = 5;

/// Which generators run, and how many suggestions survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Complete the final token to every word it prefixes.
    pub prefix: bool,
    /// Split a run-together final token into two words.
    pub whitespace: bool,
    /// Edit-distance bound; 0 turns the generator off.
    pub max_edit_distance: usize,
    /// Maximum number of suggestions to return. Values above
    /// [`MAX_SUGGESTIONS`] are clamped.
    pub max_suggestions: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            prefix: false,
            whitespace: false,
            max_edit_distance: 0,
            max_suggestions: MAX_SUGGESTIONS,
        }
    }
}

impl SuggestConfig {
    pub fn with_prefix(mut self, enabled: bool) -> Self {
        self.prefix = enabled;
        self
    }

    pub fn with_whitespace(mut self, enabled: bool) -> Self {
        self.whitespace = enabled;
        self
    }

    pub fn with_max_edit_distance(mut self, distance: usize) -> Self {
        self.max_edit_distance = distance;
        self
    }

    pub fn with_max_suggestions(mut self, count: usize) -> Self {
        self.max_suggestions = count;
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            AutocorrectError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Produces suggestions for the final token of a phrase.
///
/// ```
/// use autocorrect::spelling::{Autocorrector, SuggestConfig, WordIndex};
///
/// let index: WordIndex = ["apple", "apply", "ape"].iter().collect();
/// let autocorrector = Autocorrector::new(index, SuggestConfig::default().with_prefix(true));
///
/// let suggestions: Vec<String> = autocorrector.suggest("Eat an AP").into_iter().collect();
/// assert_eq!(suggestions, ["eat an ape", "eat an apple", "eat an apply"]);
/// ```
#[derive(Debug, Clone)]
pub struct Autocorrector {
    index: WordIndex,
    config: SuggestConfig,
}

impl Autocorrector {
    pub fn new(index: WordIndex, config: SuggestConfig) -> Self {
        Autocorrector { index, config }
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Union of every enabled generator's output for `token`, sorted.
    pub fn candidates(&self, token: &str) -> BTreeSet<String> {
        let mut candidates = BTreeSet::new();

        if self.config.prefix {
            candidates.extend(self.index.find_all_with_prefix(token));
        }
        if self.config.whitespace {
            candidates.extend(self.index.whitespace_split(token));
        }
        if self.config.max_edit_distance > 0 {
            candidates.extend(
                self.index
                    .find_within_edit_distance(token, self.config.max_edit_distance),
            );
        }

        candidates
    }

    /// Suggest replacements for the last token of `input`.
    ///
    /// The input is normalized first. The candidate set is cut to the first
    /// `max_suggestions` entries (never more than [`MAX_SUGGESTIONS`]) in
    /// ASCII order, and only then are the leading tokens put back in front
    /// of each survivor.
    pub fn suggest(&self, input: &str) -> BTreeSet<String> {
        let phrase = Phrase::parse(input);
        let Some(token) = phrase.last_token() else {
            return BTreeSet::new();
        };

        let candidates = self.candidates(token);
        debug!("{} candidates for {token:?}", candidates.len());

        let stem = phrase.stem();
        candidates
            .into_iter()
            .take(self.config.max_suggestions.min(MAX_SUGGESTIONS))
            .map(|candidate| {
                if stem.is_empty() {
                    candidate
                } else {
                    format!("{stem} {candidate}")
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> WordIndex {
        ["apple", "apply", "ape", "bat", "bats", "batman", "cat"]
            .iter()
            .collect()
    }

    fn suggest(config: SuggestConfig, input: &str) -> Vec<String> {
        Autocorrector::new(sample_index(), config)
            .suggest(input)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = SuggestConfig::default();
        assert!(!config.prefix);
        assert!(!config.whitespace);
        assert_eq!(config.max_edit_distance, 0);
        assert_eq!(config.max_suggestions, 5);
    }

    #[test]
    fn test_no_generators_means_no_suggestions() {
        assert!(suggest(SuggestConfig::default(), "apple").is_empty());
    }

    #[test]
    fn test_prefix_suggestions() {
        let config = SuggestConfig::default().with_prefix(true);
        assert_eq!(suggest(config.clone(), "ap"), ["ape", "apple", "apply"]);
        assert_eq!(
            suggest(config, "hello ap"),
            ["hello ape", "hello apple", "hello apply"]
        );
    }

    #[test]
    fn test_edit_distance_zero_is_disabled() {
        let config = SuggestConfig::default().with_max_edit_distance(0);
        assert!(suggest(config, "bat").is_empty());
    }

    #[test]
    fn test_truncates_before_reattaching() {
        let config = SuggestConfig::default()
            .with_prefix(true)
            .with_max_edit_distance(2);
        // within 2 of "bat": bat, bats, cat; prefixes: bat, batman, bats
        assert_eq!(
            suggest(config.clone(), "bat"),
            ["bat", "batman", "bats", "cat"]
        );

        let narrow = config.with_max_suggestions(2);
        assert_eq!(suggest(narrow.clone(), "bat"), ["bat", "batman"]);
        assert_eq!(suggest(narrow, "the bat"), ["the bat", "the batman"]);
    }

    #[test]
    fn test_never_more_than_five() {
        let config = SuggestConfig::default()
            .with_prefix(true)
            .with_whitespace(true)
            .with_max_edit_distance(6);
        let suggestions = suggest(config, "a");
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions, ["ape", "apple", "apply", "bat", "batman"]);
    }

    #[test]
    fn test_cap_above_five_is_clamped() {
        let index: WordIndex = ["aa", "ab", "ac", "ad", "ae", "af", "ag"].iter().collect();
        let config = SuggestConfig::default()
            .with_prefix(true)
            .with_max_suggestions(7);
        let suggestions: Vec<String> = Autocorrector::new(index, config)
            .suggest("a")
            .into_iter()
            .collect();
        assert_eq!(suggestions, ["aa", "ab", "ac", "ad", "ae"]);
    }

    #[test]
    fn test_json_cap_above_five_is_clamped() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"prefix": true, "max_suggestions": 7}"#).unwrap();

        let config = SuggestConfig::from_json_file(&path).unwrap();
        let index: WordIndex = ["aa", "ab", "ac", "ad", "ae", "af", "ag"].iter().collect();
        let suggestions = Autocorrector::new(index, config).suggest("x a");
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert!(suggestions.iter().all(|s| s.starts_with("x a")));
    }

    #[test]
    fn test_config_from_json_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"prefix": true, "max_edit_distance": 2}"#).unwrap();

        let config = SuggestConfig::from_json_file(&path).unwrap();
        assert_eq!(
            config,
            SuggestConfig::default()
                .with_prefix(true)
                .with_max_edit_distance(2)
        );
    }

    #[test]
    fn test_config_from_missing_file() {
        let result = SuggestConfig::from_json_file("/nonexistent/config.json");
        assert!(matches!(result, Err(AutocorrectError::Config(_))));
    }

    #[test]
    fn test_config_from_invalid_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "prefix = true").unwrap();

        let result = SuggestConfig::from_json_file(&path);
        assert!(matches!(result, Err(AutocorrectError::Json(_))));
    }
}
