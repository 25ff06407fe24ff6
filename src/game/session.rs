//! Guess loop state machine
//!
//! A session starts out collecting guesses and ends either won, with the
//! number of valid guesses it took, or lost once every attempt is used.

use crate::config::GameConfig;
use crate::console::Console;
use crate::core::{Feedback, Word};
use crate::output::{Palette, render_history};
use crate::wordlists::{Dictionary, InvalidWord};
use anyhow::{Context, Result};
use std::fmt;

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Collecting,
    Won(usize),
    Lost,
}

/// Final result of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Solved on this (1-based) valid guess
    Won(usize),
    Lost,
}

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Invalid(InvalidWord),
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "Invalid guess: {e}"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::GameOver => None,
        }
    }
}

/// One game: a fixed solution and the valid guesses made against it
pub struct GameSession<'a> {
    solution: Word,
    dictionary: &'a Dictionary,
    max_guesses: usize,
    history: Vec<(Word, Feedback)>,
    state: GameState,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(solution: Word, dictionary: &'a Dictionary, config: &GameConfig) -> Self {
        Self {
            solution,
            dictionary,
            max_guesses: config.max_guesses.max(1),
            history: Vec::new(),
            state: GameState::Collecting,
        }
    }

    /// Submit one guess
    ///
    /// Invalid words are rejected without using up an attempt and never show
    /// up in the history.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::Invalid` for a word of the wrong shape or one
    /// missing from the dictionary, `GuessError::GameOver` once finished.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::config::GameConfig;
    /// use wordle_duel::core::Word;
    /// use wordle_duel::game::{GameSession, GameState};
    /// use wordle_duel::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_entries(["hello", "salut", "alloo"]);
    /// let solution = Word::new("hello").unwrap();
    /// let mut session = GameSession::new(solution, &dictionary, &GameConfig::default());
    ///
    /// assert!(session.submit("bonjour").is_err());
    /// assert_eq!(session.submit("hello").unwrap(), GameState::Won(1));
    /// ```
    pub fn submit(&mut self, input: &str) -> Result<GameState, GuessError> {
        if self.state != GameState::Collecting {
            return Err(GuessError::GameOver);
        }

        let guess = self
            .dictionary
            .validate(input)
            .map_err(GuessError::Invalid)?;
        let feedback = Feedback::calculate(&guess, &self.solution);
        self.history.push((guess, feedback));

        self.state = if feedback.is_perfect() {
            GameState::Won(self.history.len())
        } else if self.history.len() >= self.max_guesses {
            GameState::Lost
        } else {
            GameState::Collecting
        };

        tracing::debug!(
            attempt = self.history.len(),
            feedback = %feedback,
            state = ?self.state,
            "guess accepted"
        );
        Ok(self.state)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The final result, once the session has finished
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Collecting => None,
            GameState::Won(attempts) => Some(Outcome::Won(attempts)),
            GameState::Lost => Some(Outcome::Lost),
        }
    }

    /// Valid guesses made so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_guesses - self.history.len()
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }
}

/// Prompt for guesses until the session finishes
///
/// After every accepted guess the whole colored history is echoed, not just
/// the latest row.
///
/// # Errors
///
/// Returns an error if reading from the console fails.
pub fn play_session(
    session: &mut GameSession<'_>,
    console: &mut dyn Console,
    palette: &Palette,
) -> Result<Outcome> {
    loop {
        if let Some(outcome) = session.outcome() {
            return Ok(outcome);
        }

        let input = console
            .read_line("Enter a guess: ")
            .context("Failed to read guess")?;

        match session.submit(&input) {
            Ok(_) => {
                for line in render_history(palette, session.history()) {
                    console.say(&line);
                }
            }
            Err(GuessError::Invalid(reason)) => {
                tracing::debug!(%reason, "guess rejected");
                console.say("Not a valid word, please enter a new one.");
            }
            // Picked up by the outcome check at the top of the loop
            Err(GuessError::GameOver) => {}
        }
    }
}
