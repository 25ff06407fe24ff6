//! Word list loading utilities
//!
//! Provides functions to read a raw word list and keep the playable words.

use crate::core::{WORD_LENGTH, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load every entry of a whitespace-delimited word file
///
/// No filtering happens here; see [`playable_words`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_duel::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/wordle-dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}

/// Keep only the words of the fixed length, lowercased, in their original order
///
/// Duplicates are preserved. Entries of the right length that are not plain
/// letters cannot be played and are dropped as well.
///
/// # Examples
/// ```
/// use wordle_duel::wordlists::loader::playable_words;
///
/// let words = playable_words(["abs", "about", "abouts", "above", "aboveboard", "aloft"]);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["about", "above", "aloft"]);
/// ```
#[must_use]
pub fn playable_words<I, S>(entries: I) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter(|entry| entry.as_ref().chars().count() == WORD_LENGTH)
        .filter_map(|entry| Word::new(entry.as_ref()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn playable_words_keeps_five_letter_entries() {
        let words = playable_words(["hello", "salut", "dance"]);
        assert_eq!(texts(&words), ["hello", "salut", "dance"]);
    }

    #[test]
    fn playable_words_none_match() {
        assert!(playable_words(["abs", "abb", "bab", "did"]).is_empty());
    }

    #[test]
    fn playable_words_lowercases_and_keeps_duplicates() {
        let words = playable_words(["Hello", "floor", "floor", "c4per"]);
        assert_eq!(texts(&words), ["hello", "floor", "floor"]);
    }

    #[test]
    fn playable_words_empty() {
        let input: [&str; 0] = [];
        assert!(playable_words(input).is_empty());
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_repo_dictionary() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordle-dictionary.txt");
        let words = load_from_file(path).unwrap();
        assert_eq!(words.len(), crate::wordlists::DICTIONARY_COUNT);
        assert_eq!(words.first().map(String::as_str), Some("a"));
    }
}
