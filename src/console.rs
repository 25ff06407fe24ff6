//! Line-oriented console I/O
//!
//! The game talks to players only through [`Console`], so the same flow runs
//! against the real terminal or a scripted one in tests.

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

/// Prompt-and-answer access to the players
pub trait Console {
    /// Show `prompt` and read one line, without the trailing newline
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` when input is exhausted, or any I/O error.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Like [`Console::read_line`], but the typed text must not stay visible
    ///
    /// # Errors
    ///
    /// Same as [`Console::read_line`], plus `Interrupted` on Ctrl-C.
    fn read_secret(&mut self, prompt: &str) -> io::Result<String>;

    /// Print one line of output
    fn say(&mut self, line: &str);
}

/// The real terminal: stdin and stdout
pub struct TerminalConsole {
    mask_delay: Duration,
}

impl TerminalConsole {
    /// `mask_delay` is how long a secret stays on screen when echo cannot be turned off
    #[must_use]
    pub const fn new(mask_delay: Duration) -> Self {
        Self { mask_delay }
    }

    /// Read a secret with echo suppressed through raw mode
    fn read_unechoed(prompt: &str) -> io::Result<String> {
        let _raw = RawModeGuard::enable()?;

        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
        let mut secret = String::new();

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Err(io::Error::new(
                        io::ErrorKind::Interrupted,
                        "secret entry cancelled",
                    ));
                }
                KeyCode::Enter => break,
                KeyCode::Backspace => {
                    secret.pop();
                }
                KeyCode::Char(c) => secret.push(c),
                _ => {}
            }
        }

        // Raw mode needs an explicit carriage return
        write!(stdout, "\r\n")?;
        stdout.flush()?;
        Ok(secret)
    }

    /// Read a secret with echo on, then wipe the line after a delay
    fn read_then_wipe(&mut self, prompt: &str) -> io::Result<String> {
        let secret = self.read_line(prompt)?;
        thread::sleep(self.mask_delay);

        let mut stdout = io::stdout();
        execute!(
            stdout,
            cursor::MoveUp(1),
            terminal::Clear(ClearType::CurrentLine),
            cursor::MoveToColumn(0)
        )?;
        Ok(secret)
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        match Masking::for_input(io::stdin().is_terminal()) {
            Masking::Unechoed => match Self::read_unechoed(prompt) {
                Err(e) if e.kind() == io::ErrorKind::Unsupported => {
                    tracing::debug!(error = %e, "raw mode unavailable, wiping the line instead");
                    self.read_then_wipe(prompt)
                }
                result => result,
            },
            Masking::NotEchoed => self.read_line(prompt),
        }
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}

/// How a secret is kept off the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Masking {
    /// Interactive terminal: read keys in raw mode
    Unechoed,
    /// Piped or redirected input never reaches the screen, so there is
    /// nothing to wait for or wipe
    NotEchoed,
}

impl Masking {
    const fn for_input(stdin_is_terminal: bool) -> Self {
        if stdin_is_terminal {
            Self::Unechoed
        } else {
            Self::NotEchoed
        }
    }
}

/// Leaves raw mode when dropped, including on early returns
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode().map_err(|e| io::Error::new(io::ErrorKind::Unsupported, e))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Replays canned input and records everything shown
///
/// # Examples
/// ```
/// use wordle_duel::console::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["2", "hello"]);
/// assert_eq!(console.read_line("Players: ").unwrap(), "2");
/// assert_eq!(console.read_secret("Word: ").unwrap(), "hello");
/// assert!(console.read_line("More: ").is_err());
/// ```
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    lines: Vec<String>,
    secrets_read: usize,
}

impl ScriptedConsole {
    #[must_use]
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every prompt shown, in order
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every line printed through [`Console::say`], in order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// How many answers were read through [`Console::read_secret`]
    #[must_use]
    pub const fn secrets_read(&self) -> usize {
        self.secrets_read
    }

    /// Answers not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    fn next_input(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.next_input(prompt)
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        let secret = self.next_input(prompt)?;
        self.secrets_read += 1;
        Ok(secret)
    }

    fn say(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_console_replays_in_order() {
        let mut console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(console.read_line("a: ").unwrap(), "first");
        assert_eq!(console.read_secret("b: ").unwrap(), "second");
        assert_eq!(console.prompts(), ["a: ", "b: "]);
        assert_eq!(console.secrets_read(), 1);
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn scripted_console_reports_eof() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let err = console.read_line("x: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn redirected_input_is_neither_delayed_nor_wiped() {
        assert_eq!(Masking::for_input(false), Masking::NotEchoed);
        assert_eq!(Masking::for_input(true), Masking::Unechoed);
    }

    #[test]
    fn scripted_console_records_output() {
        let mut console = ScriptedConsole::default();
        console.say("hello");
        console.say("world");
        assert_eq!(console.lines(), ["hello", "world"]);
    }
}
