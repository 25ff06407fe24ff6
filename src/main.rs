//! Wordle Duel - CLI
//!
//! Guess the five-letter word in six tries, alone or against a friend.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum, builder::TypedValueParser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Duration;
use wordle_duel::{
    commands::{PlayOptions, run_play},
    config::GameConfig,
    console::TerminalConsole,
    game::Mode,
    logging,
    output::Palette,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_duel",
    about = "Terminal Wordle for one or two players",
    version,
    author
)]
struct Cli {
    /// Number of players; asked interactively when omitted
    #[arg(short, long, value_enum)]
    players: Option<Players>,

    /// Word list file (whitespace separated); the built-in dictionary by default
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Valid guesses allowed before the game is lost
    #[arg(short = 'g', long, default_value_t = GameConfig::DEFAULT_MAX_GUESSES,
          value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    max_guesses: usize,

    /// Seed for the random solution in single-player mode
    #[arg(short, long)]
    seed: Option<u64>,

    /// How long a secret word stays visible when the terminal cannot hide it
    #[arg(long, default_value = "2000")]
    mask_delay_ms: u64,

    /// Disable ANSI colors and show emoji feedback instead
    #[arg(long)]
    plain: bool,

    /// Write diagnostics to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose diagnostics
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Players {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

impl From<Players> for Mode {
    fn from(players: Players) -> Self {
        match players {
            Players::One => Self::SinglePlayer,
            Players::Two => Self::TwoPlayer,
        }
    }
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: Option<&Path>) -> Result<Dictionary> {
    match wordlist {
        Some(path) => Dictionary::from_file(path)
            .with_context(|| format!("Cannot use word list {}", path.display())),
        None => Ok(Dictionary::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logging = logging::init(cli.verbose, cli.log_file.as_deref())?;

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    tracing::info!(words = dictionary.len(), "dictionary ready");

    let palette = if cli.plain {
        Palette::plain()
    } else {
        Palette::ansi()
    };
    let config = GameConfig::default()
        .with_max_guesses(cli.max_guesses)
        .with_mask_delay(Duration::from_millis(cli.mask_delay_ms))
        .with_palette(palette);

    let options = PlayOptions {
        mode: cli.players.map(Mode::from),
    };
    let mut console = TerminalConsole::new(config.mask_delay);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    run_play(&dictionary, &config, options, &mut console, &mut rng)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn max_guesses_defaults_and_overrides() {
        let cli = Cli::try_parse_from(["wordle_duel"]).unwrap();
        assert_eq!(cli.max_guesses, GameConfig::DEFAULT_MAX_GUESSES);

        let cli = Cli::try_parse_from(["wordle_duel", "-g", "3"]).unwrap();
        assert_eq!(cli.max_guesses, 3);
    }

    #[test]
    fn max_guesses_rejects_zero() {
        assert!(Cli::try_parse_from(["wordle_duel", "--max-guesses", "0"]).is_err());
    }

    #[test]
    fn players_flag_selects_mode() {
        let cli = Cli::try_parse_from(["wordle_duel", "--players", "2"]).unwrap();
        assert_eq!(cli.players.map(Mode::from), Some(Mode::TwoPlayer));
        assert!(Cli::try_parse_from(["wordle_duel", "--players", "3"]).is_err());
    }
}
