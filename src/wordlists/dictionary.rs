//! Filtered dictionary with fast membership checks

use super::loader::{load_from_file, playable_words};
use super::DICTIONARY;
use crate::core::{Word, WordError};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Playable words in insertion order, plus a set for lookups
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

/// Why a submitted word cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidWord {
    Malformed(WordError),
    NotInDictionary(String),
}

impl fmt::Display for InvalidWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "{e}"),
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the dictionary"),
        }
    }
}

impl std::error::Error for InvalidWord {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            Self::NotInDictionary(_) => None,
        }
    }
}

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Empty => write!(f, "Word list contains no playable words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl Dictionary {
    /// Build a dictionary from raw entries, keeping the playable ones
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_entries(["hello", "salut", "alloo", "bonjour"]);
    /// assert_eq!(dictionary.len(), 3);
    /// assert!(dictionary.is_valid("HELLO"));
    /// assert!(!dictionary.is_valid("bonjour"));
    /// ```
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = playable_words(entries);
        let lookup = words.iter().cloned().collect();
        Self { words, lookup }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_entries(DICTIONARY)
    }

    /// Read a word file and keep its playable words
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read and
    /// `DictionaryError::Empty` if nothing in it can be played.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let entries = load_from_file(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_entries(&entries);
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty);
        }

        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            playable = dictionary.len(),
            "word list loaded"
        );
        Ok(dictionary)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Turn raw input into a playable word (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `InvalidWord` if the input is not a 5-letter word or is not in
    /// the dictionary.
    pub fn validate(&self, input: &str) -> Result<Word, InvalidWord> {
        let word = Word::new(input.trim()).map_err(InvalidWord::Malformed)?;
        if self.contains(&word) {
            Ok(word)
        } else {
            Err(InvalidWord::NotInDictionary(word.text().to_string()))
        }
    }

    /// Check whether input would be accepted by [`Dictionary::validate`]
    #[must_use]
    pub fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }

    /// Draw a word uniformly at random, `None` if the dictionary is empty
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}
