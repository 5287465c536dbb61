use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tokio::fs;

/// Words shorter than this are never stored or reported.
pub const MIN_WORD_LEN: usize = 3;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word source: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("word source contained no usable words")]
    EmptyWordSource,
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Canonical stored word, present on terminal nodes only.
    word: Option<String>,
}

/// The word dictionary, backed by a prefix tree so that both exact lookups
/// and "does any word start with this?" queries cost O(key length) no matter
/// how many words are loaded.
///
/// Word sources are plain text, one candidate word per line, any case.
pub struct Dictionary {
    root: TrieNode,
    len: usize,
    max_word_len: usize,
}

impl Dictionary {
    /// Load a dictionary from a word-list file.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path).await?;
        let dictionary = Self::from_lines(content.lines())?;

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Build a dictionary from raw word-list lines.
    ///
    /// Lines are uppercased and trimmed; only words of at least
    /// [`MIN_WORD_LEN`] letters are stored. The running maximum word length
    /// is taken from every trimmed line, before the length filter.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self {
            root: TrieNode::default(),
            len: 0,
            max_word_len: 0,
        };

        for line in lines {
            let word = line.as_ref().trim().to_uppercase();
            let len = word.chars().count();
            if len > dictionary.max_word_len {
                dictionary.max_word_len = len;
            }
            if len >= MIN_WORD_LEN {
                dictionary.insert(word);
            }
        }

        if dictionary.is_empty() {
            return Err(DictionaryError::EmptyWordSource);
        }

        Ok(dictionary)
    }

    fn insert(&mut self, word: String) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.word.is_none() {
            self.len += 1;
        }
        node.word = Some(word);
    }

    /// Exact-match lookup, returning the canonical stored form of the word.
    ///
    /// Keys are matched as stored, i.e. uppercase.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.walk(key)?.word.as_deref()
    }

    /// True when at least one stored word starts with `key`. A stored word
    /// counts as a prefix of itself.
    pub fn has_prefix(&self, key: &str) -> bool {
        self.walk(key).is_some()
    }

    fn walk(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Length of the longest line seen while loading, in characters.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_lines(["cat", "cats", "dog"]).unwrap()
    }

    #[test]
    fn test_lookup_matches_exact_words_only() {
        let dict = sample();
        assert_eq!(dict.lookup("CAT"), Some("CAT"));
        assert_eq!(dict.lookup("CATS"), Some("CATS"));
        assert_eq!(dict.lookup("CA"), None);
        assert_eq!(dict.lookup("CATSS"), None);
        assert_eq!(dict.lookup("DOGS"), None);
    }

    #[test]
    fn test_lines_are_trimmed_and_uppercased() {
        let dict = Dictionary::from_lines(["  cAt\t", "Dog "]).unwrap();
        assert_eq!(dict.lookup("CAT"), Some("CAT"));
        assert_eq!(dict.lookup("DOG"), Some("DOG"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_every_prefix_of_a_stored_word_is_a_prefix() {
        let dict = sample();
        for word in ["CAT", "CATS", "DOG"] {
            for end in 1..=word.len() {
                assert!(dict.has_prefix(&word[..end]), "prefix {}", &word[..end]);
            }
        }
        assert!(!dict.has_prefix("X"));
        assert!(!dict.has_prefix("CATX"));
    }

    #[test]
    fn test_short_lines_are_dropped_but_still_measured() {
        let dict = Dictionary::from_lines(["at", "cat"]).unwrap();
        assert_eq!(dict.lookup("AT"), None);
        assert!(!dict.has_prefix("AT"));
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.max_word_len(), 3);
    }

    #[test]
    fn test_duplicate_lines_are_stored_once() {
        let dict = Dictionary::from_lines(["cat", "CAT", " cat "]).unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_max_word_len_tracks_longest_line() {
        let dict = Dictionary::from_lines(["cat", "elephant", "dog"]).unwrap();
        assert_eq!(dict.max_word_len(), 8);
    }

    #[test]
    fn test_empty_source_is_an_error() {
        assert!(matches!(
            Dictionary::from_lines(std::iter::empty::<&str>()),
            Err(DictionaryError::EmptyWordSource)
        ));
        assert!(matches!(
            Dictionary::from_lines(["at", "a", ""]),
            Err(DictionaryError::EmptyWordSource)
        ));
    }

    #[tokio::test]
    async fn test_load_reads_one_word_per_line() {
        let path = std::env::temp_dir().join("boggle-solver-dict-test.txt");
        std::fs::write(&path, "cat\ncats\ndog\n").unwrap();

        let dict = Dictionary::load(&path).await.unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.lookup("CATS"), Some("CATS"));

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_load_missing_file_is_unreadable() {
        let path = std::env::temp_dir().join("boggle-solver-no-such-file.txt");
        assert!(matches!(
            Dictionary::load(&path).await,
            Err(DictionaryError::Unreadable(_))
        ));
    }
}
