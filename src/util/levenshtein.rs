//! Levenshtein edit distance.
//!
//! This is the scalar, whole-string version. The word index carries its own
//! incremental row while walking the trie and only calls this to check its
//! results, or for callers that hold two plain strings.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(word1: &str, word2: &str) -> usize {
    let chars1: Vec<char> = word1.chars().collect();
    let chars2: Vec<char> = word2.chars().collect();
    let len1 = chars1.len();
    let len2 = chars2.len();

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = usize::from(chars1[i - 1] != chars2[j - 1]);

            matrix[i][j] = min(
                min(
                    matrix[i][j - 1] + 1, // insertion
                    matrix[i - 1][j] + 1, // deletion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2);
        assert_eq!(levenshtein_distance("aple", "apple"), 1);
        assert_eq!(levenshtein_distance("aple", "ape"), 1);
        assert_eq!(levenshtein_distance("aple", "apply"), 2);
    }

    #[test]
    fn test_levenshtein_properties() {
        let words = ["", "a", "ap", "ape", "apple", "apply", "bat", "batman", "cat"];
        for a in words {
            assert_eq!(levenshtein_distance(a, a), 0);
            for b in words {
                let d = levenshtein_distance(a, b);
                let (la, lb) = (a.len(), b.len());
                assert_eq!(d, levenshtein_distance(b, a), "{a} / {b}");
                assert!(d <= la + lb);
                assert!(d >= la.abs_diff(lb));
            }
        }
    }
}
