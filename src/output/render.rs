//! Painting letters with ANSI background colors

use crate::console::Console;
use crate::core::{Feedback, LetterFeedback, Word};

/// ANSI escape codes for each feedback color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub green: &'static str,
    pub yellow: &'static str,
    pub gray: &'static str,
    pub reset: &'static str,
}

impl Palette {
    /// Black text on green / yellow / white backgrounds
    #[must_use]
    pub const fn ansi() -> Self {
        Self {
            green: "\x1b[6;30;42m",
            yellow: "\x1b[6;30;43m",
            gray: "\x1b[6;30;47m",
            reset: "\x1b[0m",
        }
    }

    /// No escape codes at all, for pipes and dumb terminals
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            green: "",
            yellow: "",
            gray: "",
            reset: "",
        }
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }

    /// Look up the escape code for a color name (`green`, `yellow`, `gray`)
    #[must_use]
    pub fn code(&self, name: &str) -> Option<&'static str> {
        match name {
            "green" => Some(self.green),
            "yellow" => Some(self.yellow),
            "gray" => Some(self.gray),
            _ => None,
        }
    }

    /// Escape code for a feedback category
    #[must_use]
    pub const fn category_code(&self, category: LetterFeedback) -> &'static str {
        match category {
            LetterFeedback::Correct => self.green,
            LetterFeedback::Present => self.yellow,
            LetterFeedback::Absent => self.gray,
        }
    }

    /// Wrap `text` in a color code followed by the reset code
    #[must_use]
    pub fn paint(&self, text: &str, code: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        format!("{code}{text}{}", self.reset)
    }

    /// Paint `text` with a named color
    ///
    /// An unknown name is not fatal: "Invalid color." is shown on the console
    /// and the text comes back unstyled.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::console::ScriptedConsole;
    /// use wordle_duel::output::Palette;
    ///
    /// let palette = Palette::ansi();
    /// let mut console = ScriptedConsole::default();
    ///
    /// assert_eq!(
    ///     palette.paint_named("about", "green", &mut console),
    ///     "\x1b[6;30;42mabout\x1b[0m"
    /// );
    /// assert_eq!(palette.paint_named("green", "rose", &mut console), "green");
    /// assert_eq!(console.lines(), ["Invalid color."]);
    /// ```
    pub fn paint_named(&self, text: &str, name: &str, console: &mut dyn Console) -> String {
        if let Some(code) = self.code(name) {
            self.paint(text, code)
        } else {
            tracing::warn!(color = name, "unknown color requested");
            console.say("Invalid color.");
            text.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}

/// Render one guess with its feedback, one colored run per letter
///
/// With a plain palette the letters are followed by the emoji feedback so the
/// row still carries the information.
#[must_use]
pub fn render_row(palette: &Palette, guess: &Word, feedback: &Feedback) -> String {
    if palette.is_plain() {
        return format!("{} {}", guess.text(), feedback.to_emoji());
    }

    let mut row = String::new();
    for (&letter, category) in guess.chars().iter().zip(feedback.letters()) {
        let letter = char::from(letter).to_string();
        row.push_str(&palette.paint(&letter, palette.category_code(*category)));
    }
    row
}

/// Render every accepted guess so far, one per line, oldest first
#[must_use]
pub fn render_history(palette: &Palette, history: &[(Word, Feedback)]) -> Vec<String> {
    history
        .iter()
        .map(|(guess, feedback)| render_row(palette, guess, feedback))
        .collect()
}
