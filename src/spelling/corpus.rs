//! Best-effort corpus loading.
//!
//! Files that cannot be opened or read are skipped; they contribute no
//! words and the build carries on with the next file.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};

use crate::spelling::normalize::tokenize;
use crate::spelling::trie::WordIndex;

/// Read one corpus file and return its tokens, or `None` when the file
/// cannot be opened or read to the end.
pub fn read_corpus_file<P: AsRef<Path>>(path: P) -> Option<Vec<String>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("Skipping corpus file {}: {e}", path.display());
            return None;
        }
    };

    let mut bytes = Vec::new();
    if let Err(e) = BufReader::new(file).read_to_end(&mut bytes) {
        debug!("Skipping corpus file {}: {e}", path.display());
        return None;
    }

    // Bytes that are not valid UTF-8 decode to U+FFFD, which is a separator.
    Some(tokenize(&String::from_utf8_lossy(&bytes)))
}

/// Read every corpus file in order and concatenate their tokens.
pub fn read_corpus<I, P>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut words = Vec::new();
    for path in paths {
        if let Some(tokens) = read_corpus_file(&path) {
            debug!(
                "Read {} tokens from {}",
                tokens.len(),
                path.as_ref().display()
            );
            words.extend(tokens);
        }
    }
    words
}

impl WordIndex {
    /// Build an index from the words of every readable corpus file.
    pub fn from_corpus_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let index: WordIndex = read_corpus(paths).into_iter().collect();
        info!(
            "Indexed {} distinct words in {} trie nodes",
            index.len(),
            index.node_count()
        );
        index
    }
}
