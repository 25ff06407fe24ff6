//! End-of-game report

use super::Palette;
use crate::console::Console;
use crate::core::{LetterFeedback, Word};
use crate::game::Outcome;
use colored::Colorize;

/// Format the final message for a finished game
///
/// `revealed` is the solution as it should appear in a lost game's message,
/// already painted.
///
/// # Examples
/// ```
/// use wordle_duel::game::Outcome;
/// use wordle_duel::output::format_outcome;
///
/// assert_eq!(format_outcome(Outcome::Won(4), "hello"), "You won! It took you 4 guesses.");
/// assert_eq!(format_outcome(Outcome::Lost, "about"), "You lost! The word was about");
/// ```
#[must_use]
pub fn format_outcome(outcome: Outcome, revealed: &str) -> String {
    match outcome {
        Outcome::Won(attempts) => format!("You won! It took you {attempts} guesses."),
        Outcome::Lost => format!("You lost! The word was {revealed}"),
    }
}

/// Show the final message inside a banner
///
/// A lost game reveals the solution in the Correct color.
pub fn print_outcome(
    outcome: Outcome,
    solution: &Word,
    palette: &Palette,
    console: &mut dyn Console,
) {
    let revealed = palette.paint_named(
        solution.text(),
        LetterFeedback::Correct.color_name(),
        console,
    );
    let message = format_outcome(outcome, &revealed);
    let rule = "═".repeat(40);

    if palette.is_plain() {
        console.say(&format!("\n{rule}"));
        console.say(&message);
        console.say(&format!("{rule}\n"));
        return;
    }

    console.say(&format!("\n{}", rule.bright_cyan()));
    match outcome {
        Outcome::Won(_) => console.say(&message.bright_green().bold().to_string()),
        // The painted solution carries its own colors
        Outcome::Lost => console.say(&message),
    }
    console.say(&format!("{}\n", rule.bright_cyan()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn won_reports_attempt_count() {
        assert_eq!(
            format_outcome(Outcome::Won(3), "caper"),
            "You won! It took you 3 guesses."
        );
    }

    #[test]
    fn lost_reveals_solution_in_green() {
        let solution = Word::new("about").unwrap();
        let mut console = ScriptedConsole::default();

        print_outcome(Outcome::Lost, &solution, &Palette::ansi(), &mut console);

        assert!(
            console
                .lines()
                .iter()
                .any(|line| line == "You lost! The word was \x1b[6;30;42mabout\x1b[0m")
        );
    }

    #[test]
    fn plain_banner_wraps_message() {
        let solution = Word::new("salut").unwrap();
        let mut console = ScriptedConsole::default();

        print_outcome(Outcome::Lost, &solution, &Palette::plain(), &mut console);

        let rule = "═".repeat(40);
        assert_eq!(
            console.lines(),
            [
                format!("\n{rule}"),
                "You lost! The word was salut".to_string(),
                format!("{rule}\n"),
            ]
        );
    }

    #[test]
    fn won_message_does_not_reveal() {
        let solution = Word::new("hello").unwrap();
        let mut console = ScriptedConsole::default();

        print_outcome(Outcome::Won(1), &solution, &Palette::plain(), &mut console);

        assert_eq!(console.lines()[1], "You won! It took you 1 guesses.");
        assert!(!console.lines().iter().any(|line| line.contains("hello")));
    }
}
