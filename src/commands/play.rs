//! Play command
//!
//! One full game: pick the mode and solution, run the guess loop, report.

use crate::config::GameConfig;
use crate::console::Console;
use crate::game::{GameSession, Mode, Outcome, choose_mode, choose_solution, play_session};
use crate::output::print_outcome;
use crate::wordlists::Dictionary;
use anyhow::Result;
use rand::Rng;

/// Per-run choices made on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Skip the player-count prompt
    pub mode: Option<Mode>,
}

/// Play one game and return how it ended
///
/// # Errors
///
/// Returns an error if the console fails, the player count is never given
/// correctly, or there is no word to draw a solution from.
pub fn run_play<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: &GameConfig,
    options: PlayOptions,
    console: &mut dyn Console,
    rng: &mut R,
) -> Result<Outcome> {
    let mode = match options.mode {
        Some(mode) => mode,
        None => choose_mode(console, config)?,
    };

    let solution = choose_solution(mode, console, dictionary, rng)?;
    let mut session = GameSession::new(solution, dictionary, config);
    let outcome = play_session(&mut session, console, &config.palette)?;

    tracing::info!(?outcome, attempts = session.attempts(), "game finished");
    print_outcome(outcome, session.solution(), &config.palette, console);
    Ok(outcome)
}
