//! Dictionary provider
//!
//! The full word list is embedded at build time (or read from a file at
//! startup) and filtered down to the fixed-length words the game uses.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError, InvalidWord};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
