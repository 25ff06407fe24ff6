//! Wordle Duel
//!
//! Terminal Wordle for one player against a random word, or two players where
//! one hides a word for the other.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_duel::core::{Feedback, LetterFeedback, Word};
//!
//! let guess = Word::new("hello").unwrap();
//! let solution = Word::new("bello").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &solution);
//! assert_eq!(feedback.count(LetterFeedback::Correct), 4);
//! println!("{feedback}");
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod config;

// Player I/O
pub mod console;

// Mode selection and the guess loop
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostics
pub mod logging;
