//! Game flow
//!
//! Choosing the mode and solution, then running the guess loop.

mod mode;
mod session;

pub use mode::{Mode, ModeError, choose_mode, choose_solution, input_secret};
pub use session::{GameSession, GameState, GuessError, Outcome, play_session};
