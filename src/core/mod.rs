//! Core domain types for Wordle
//!
//! Words and the per-letter feedback computed for a guess. Everything here is
//! pure and free of I/O.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use word::{WORD_LENGTH, Word, WordError};
