//! Player-count selection and solution setup

use crate::config::GameConfig;
use crate::console::Console;
use crate::core::Word;
use crate::wordlists::{Dictionary, DictionaryError};
use anyhow::{Context, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// How the solution is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Solution drawn at random from the dictionary
    SinglePlayer,
    /// Player 1 types the solution, player 2 guesses it
    TwoPlayer,
}

/// Error type for player-count selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    Unsupported(String),
    TooManyAttempts(usize),
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(input) => write!(f, "Unsupported number of players: '{input}'"),
            Self::TooManyAttempts(n) => {
                write!(f, "No valid number of players after {n} attempts")
            }
        }
    }
}

impl std::error::Error for ModeError {}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.parse::<u8>() {
            Ok(1) => Ok(Self::SinglePlayer),
            Ok(2) => Ok(Self::TwoPlayer),
            _ => Err(ModeError::Unsupported(input.to_string())),
        }
    }
}

impl Mode {
    #[must_use]
    pub const fn players(self) -> u8 {
        match self {
            Self::SinglePlayer => 1,
            Self::TwoPlayer => 2,
        }
    }
}

/// Ask for the number of players until a supported answer is given
///
/// Gives up after `config.max_mode_attempts` unsupported answers.
///
/// # Errors
///
/// Returns `ModeError::TooManyAttempts` once the retries run out, or the
/// console error if input cannot be read.
pub fn choose_mode(console: &mut dyn Console, config: &GameConfig) -> Result<Mode> {
    let attempts = config.max_mode_attempts.max(1);

    for _ in 0..attempts {
        let input = console
            .read_line("Enter the number of players: ")
            .context("Failed to read number of players")?;

        match input.parse::<Mode>() {
            Ok(mode) => return Ok(mode),
            Err(e) => {
                tracing::debug!(error = %e, "mode rejected");
                console.say("Wordle can be played with 1 or 2 players. Please only enter 1 or 2.");
            }
        }
    }

    Err(ModeError::TooManyAttempts(attempts).into())
}

/// Ask player 1 for the solution, hiding what they type
///
/// Input is case-insensitive; anything outside the dictionary is refused and
/// asked for again.
///
/// # Errors
///
/// Returns an error if the console cannot be read.
pub fn input_secret(console: &mut dyn Console, dictionary: &Dictionary) -> Result<Word> {
    loop {
        let input = console
            .read_secret("Input today's word: ")
            .context("Failed to read today's word")?;

        match dictionary.validate(&input) {
            Ok(word) => return Ok(word),
            Err(reason) => {
                tracing::debug!(%reason, "secret rejected");
                console.say("Not a valid word, please enter a new one.");
            }
        }
    }
}

/// Pick the solution for a game in the given mode
///
/// # Errors
///
/// Returns `DictionaryError::Empty` if there is nothing to draw from in
/// single-player mode, or a console error in two-player mode.
pub fn choose_solution<R: Rng + ?Sized>(
    mode: Mode,
    console: &mut dyn Console,
    dictionary: &Dictionary,
    rng: &mut R,
) -> Result<Word> {
    let solution = match mode {
        Mode::SinglePlayer => dictionary
            .random_word(rng)
            .cloned()
            .ok_or(DictionaryError::Empty)?,
        Mode::TwoPlayer => {
            console.say("\n***** Player 1's turn. *****\n");
            let word = input_secret(console, dictionary)?;
            console.say("\n***** Player 2's turn. *****\n");
            word
        }
    };

    tracing::info!(players = mode.players(), "solution chosen");
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const GUIDANCE: &str = "Wordle can be played with 1 or 2 players. Please only enter 1 or 2.";

    #[test]
    fn parse_supported_modes() {
        assert_eq!("1".parse::<Mode>(), Ok(Mode::SinglePlayer));
        assert_eq!(" 2 ".parse::<Mode>(), Ok(Mode::TwoPlayer));
        assert_eq!(
            "3".parse::<Mode>(),
            Err(ModeError::Unsupported("3".to_string()))
        );
        assert!("two".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn parse_accepts_any_integer_spelling() {
        assert_eq!("01".parse::<Mode>(), Ok(Mode::SinglePlayer));
        assert_eq!("+2".parse::<Mode>(), Ok(Mode::TwoPlayer));
        assert_eq!("002".parse::<Mode>(), Ok(Mode::TwoPlayer));
        assert_eq!(
            "-1".parse::<Mode>(),
            Err(ModeError::Unsupported("-1".to_string()))
        );
        assert!("1.0".parse::<Mode>().is_err());
        assert!("256".parse::<Mode>().is_err());
    }

    #[test]
    fn choose_mode_retries_until_valid() {
        let mut console = ScriptedConsole::new(["0", "three", "2"]);
        let mode = choose_mode(&mut console, &GameConfig::default()).unwrap();

        assert_eq!(mode, Mode::TwoPlayer);
        assert_eq!(console.lines(), [GUIDANCE, GUIDANCE]);
        assert_eq!(console.prompts().len(), 3);
    }

    #[test]
    fn choose_mode_gives_up_after_limit() {
        let config = GameConfig {
            max_mode_attempts: 3,
            ..GameConfig::default()
        };
        let mut console = ScriptedConsole::new(["5", "5", "5", "1"]);

        let err = choose_mode(&mut console, &config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ModeError>(),
            Some(&ModeError::TooManyAttempts(3))
        );
        assert_eq!(console.remaining(), 1);
    }

    #[test]
    fn input_secret_is_case_insensitive_and_retries() {
        let dictionary = Dictionary::from_entries(["today", "hello", "salut"]);
        let mut console = ScriptedConsole::new(["bonjour", "zzzzz", "HeLLo"]);

        let word = input_secret(&mut console, &dictionary).unwrap();

        assert_eq!(word.text(), "hello");
        assert_eq!(console.secrets_read(), 3);
        assert_eq!(
            console.lines(),
            [
                "Not a valid word, please enter a new one.",
                "Not a valid word, please enter a new one.",
            ]
        );
    }

    #[test]
    fn two_player_solution_comes_from_player_one() {
        let dictionary = Dictionary::from_entries(["today", "hello", "salut"]);
        let mut console = ScriptedConsole::new(["today"]);
        let mut rng = StdRng::seed_from_u64(7);

        let word = choose_solution(Mode::TwoPlayer, &mut console, &dictionary, &mut rng).unwrap();

        assert_eq!(word.text(), "today");
        assert_eq!(
            console.lines(),
            [
                "\n***** Player 1's turn. *****\n",
                "\n***** Player 2's turn. *****\n",
            ]
        );
    }

    #[test]
    fn single_player_solution_is_drawn_from_dictionary() {
        let dictionary = Dictionary::from_entries(["about", "above", "aloft", "aeons"]);
        let mut console = ScriptedConsole::default();
        let mut rng = StdRng::seed_from_u64(100);

        let word =
            choose_solution(Mode::SinglePlayer, &mut console, &dictionary, &mut rng).unwrap();

        assert!(dictionary.contains(&word));
        assert!(console.prompts().is_empty());
    }

    #[test]
    fn single_player_same_seed_same_solution() {
        let dictionary = Dictionary::embedded();
        let mut console = ScriptedConsole::default();

        let first = choose_solution(
            Mode::SinglePlayer,
            &mut console,
            &dictionary,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        let second = choose_solution(
            Mode::SinglePlayer,
            &mut console,
            &dictionary,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn single_player_empty_dictionary_is_an_error() {
        let dictionary = Dictionary::from_entries(["hi"]);
        let mut console = ScriptedConsole::default();
        let mut rng = StdRng::seed_from_u64(0);

        let err = choose_solution(Mode::SinglePlayer, &mut console, &dictionary, &mut rng)
            .unwrap_err();
        assert!(err.downcast_ref::<DictionaryError>().is_some());
    }
}
