//! Vocabulary trie used by every suggestion generator.
//!
//! Nodes live in a single arena and refer to their children by index. Each
//! node has one slot per lowercase ASCII letter, so a lookup is a direct
//! array access instead of a hash lookup.

use std::cmp::min;
use std::collections::BTreeSet;
use std::num::NonZeroU32;

const ALPHABET_SIZE: usize = 26;
const ROOT: usize = 0;

/// Arena index of a non-root node. The root (index 0) is never a child.
type NodeId = NonZeroU32;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: [Option<NodeId>; ALPHABET_SIZE],
    terminal: bool,
}

impl TrieNode {
    fn children(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| child.map(|id| (letter(slot), id.get() as usize)))
    }
}

fn slot(c: char) -> Option<usize> {
    c.is_ascii_lowercase().then(|| (c as u8 - b'a') as usize)
}

fn letter(slot: usize) -> char {
    (b'a' + slot as u8) as char
}

/// Whether an arena of `len` nodes can take `new_nodes` more without the
/// last id overflowing a `u32`.
fn fits_in_arena(len: usize, new_nodes: usize) -> bool {
    new_nodes == 0
        || len
            .checked_add(new_nodes - 1)
            .is_some_and(|last| last <= u32::MAX as usize)
}

/// The vocabulary, stored as a character-keyed prefix tree.
///
/// Built once from the corpus and read-only afterwards; every query method
/// takes `&self`, so a built index can be shared between readers freely.
/// All enumerations come back as [`BTreeSet`]s and are therefore sorted in
/// ASCII order without duplicates.
#[derive(Debug, Clone)]
pub struct WordIndex {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl WordIndex {
    /// Create an empty index holding only the root node.
    pub fn new() -> Self {
        WordIndex {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Insert a word, creating intermediate nodes on demand.
    ///
    /// Returns `false` and leaves the index untouched when the word contains
    /// anything other than `a`-`z`, or when its new nodes would not fit in
    /// the arena (node ids are `u32`, so at most `u32::MAX` nodes besides the
    /// root). The empty word marks the root terminal.
    pub fn insert(&mut self, word: &str) -> bool {
        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }

        let bytes = word.as_bytes();
        let mut node = ROOT;
        let mut depth = 0;
        while let Some(&b) = bytes.get(depth) {
            match self.nodes[node].children[(b - b'a') as usize] {
                Some(child) => node = child.get() as usize,
                None => break,
            }
            depth += 1;
        }

        if !fits_in_arena(self.nodes.len(), bytes.len() - depth) {
            return false;
        }

        for &b in &bytes[depth..] {
            let Some(child) = self.push_node() else {
                return false;
            };
            self.nodes[node].children[(b - b'a') as usize] = Some(child);
            node = child.get() as usize;
        }

        if !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.word_count += 1;
        }
        true
    }

    /// Insert every word of a sequence.
    pub fn insert_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    fn push_node(&mut self) -> Option<NodeId> {
        let id = u32::try_from(self.nodes.len()).ok().and_then(NodeId::new)?;
        self.nodes.push(TrieNode::default());
        Some(id)
    }

    fn child(&self, node: usize, c: char) -> Option<usize> {
        let slot = slot(c)?;
        self.nodes[node].children[slot].map(|id| id.get() as usize)
    }

    /// Follow `path` from the root, returning the node it ends on.
    fn walk(&self, path: &str) -> Option<usize> {
        path.chars()
            .try_fold(ROOT, |node, c| self.child(node, c))
    }

    /// Number of distinct words in the vocabulary.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True iff some vocabulary word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// True iff `word` is in the vocabulary.
    pub fn has_word(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.nodes[node].terminal)
    }

    /// Every vocabulary word.
    pub fn words(&self) -> BTreeSet<String> {
        self.find_all_with_prefix("")
    }

    /// Every vocabulary word that starts with `prefix`, the prefix itself
    /// included when it is a word.
    pub fn find_all_with_prefix(&self, prefix: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        if let Some(node) = self.walk(prefix) {
            let mut path = prefix.to_string();
            self.collect_words(node, &mut path, &mut found);
        }
        found
    }

    fn collect_words(&self, node: usize, path: &mut String, found: &mut BTreeSet<String>) {
        if self.nodes[node].terminal {
            found.insert(path.clone());
        }
        for (c, child) in self.nodes[node].children() {
            path.push(c);
            self.collect_words(child, path, found);
            path.pop();
        }
    }

    /// Every way of splitting `word` into two non-empty vocabulary words,
    /// rendered as `"left right"`.
    pub fn whitespace_split(&self, word: &str) -> BTreeSet<String> {
        let mut splits = BTreeSet::new();
        let mut node = ROOT;

        // `node` always spells word[..i] when position i is inspected.
        for (i, c) in word.char_indices() {
            if i > 0 && self.nodes[node].terminal {
                let (left, right) = word.split_at(i);
                if self.has_word(right) {
                    splits.insert(format!("{left} {right}"));
                }
            }
            node = match self.child(node, c) {
                Some(child) => child,
                None => break,
            };
        }

        splits
    }

    /// Every vocabulary word within Levenshtein distance `max_distance` of
    /// `target`.
    ///
    /// The trie is walked depth first while one dynamic-programming row per
    /// level is carried down: `row[j]` is the distance between the current
    /// path and the first `j` characters of `target`. A subtree is skipped
    /// once the path is more than `max_distance` longer than the target or
    /// the smallest entry of its row already exceeds the bound.
    pub fn find_within_edit_distance(&self, target: &str, max_distance: usize) -> BTreeSet<String> {
        let target: Vec<char> = target.chars().collect();
        let first_row: Vec<usize> = (0..=target.len()).collect();
        let mut found = BTreeSet::new();
        let mut path = String::new();

        self.search_within(ROOT, &first_row, &target, max_distance, &mut path, &mut found);
        found
    }

    fn search_within(
        &self,
        node: usize,
        row: &[usize],
        target: &[char],
        max_distance: usize,
        path: &mut String,
        found: &mut BTreeSet<String>,
    ) {
        if self.nodes[node].terminal && row[target.len()] <= max_distance {
            found.insert(path.clone());
        }

        if path.len().saturating_sub(target.len()) > max_distance {
            return;
        }
        if row.iter().min().is_some_and(|&best| best > max_distance) {
            return;
        }

        for (c, child) in self.nodes[node].children() {
            let mut next = Vec::with_capacity(row.len());
            next.push(row[0] + 1);
            for j in 1..=target.len() {
                let cost = usize::from(target[j - 1] != c);
                next.push(min(min(next[j - 1] + 1, row[j] + 1), row[j - 1] + cost));
            }

            path.push(c);
            self.search_within(child, &next, target, max_distance, path, found);
            path.pop();
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordIndex {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut index = WordIndex::new();
        index.insert_all(iter);
        index
    }
}

impl<S: AsRef<str>> Extend<S> for WordIndex {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.insert_all(iter);
    }
}
