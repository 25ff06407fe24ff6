//! Game configuration
//!
//! Everything that used to be a tunable constant lives in one immutable value
//! that is handed to the components that need it.

use crate::output::Palette;
use std::time::Duration;

/// Tunable game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Valid guesses allowed before the game is lost
    pub max_guesses: usize,
    /// Invalid player-count answers tolerated before giving up
    pub max_mode_attempts: usize,
    /// How long a typed secret stays on screen when echo cannot be suppressed
    pub mask_delay: Duration,
    pub palette: Palette,
}

impl GameConfig {
    pub const DEFAULT_MAX_GUESSES: usize = 6;
    pub const DEFAULT_MAX_MODE_ATTEMPTS: usize = 5;
    pub const DEFAULT_MASK_DELAY: Duration = Duration::from_secs(2);

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn with_mask_delay(mut self, mask_delay: Duration) -> Self {
        self.mask_delay = mask_delay;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: Self::DEFAULT_MAX_GUESSES,
            max_mode_attempts: Self::DEFAULT_MAX_MODE_ATTEMPTS,
            mask_delay: Self::DEFAULT_MASK_DELAY,
            palette: Palette::ansi(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_rules() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.max_mode_attempts, 5);
        assert_eq!(config.mask_delay, Duration::from_secs(2));
        assert_eq!(config.palette, Palette::ansi());
    }

    #[test]
    fn builders_override_single_fields() {
        let config = GameConfig::default()
            .with_max_guesses(3)
            .with_mask_delay(Duration::ZERO)
            .with_palette(Palette::plain());

        assert_eq!(config.max_guesses, 3);
        assert_eq!(config.mask_delay, Duration::ZERO);
        assert_eq!(config.palette, Palette::plain());
        assert_eq!(config.max_mode_attempts, GameConfig::DEFAULT_MAX_MODE_ATTEMPTS);
    }
}
