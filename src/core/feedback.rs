//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - Correct: right letter, right position (green)
//! - Present: letter occurs elsewhere in the solution (yellow)
//! - Absent: no unmatched occurrence left in the solution (gray)

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback category for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

impl LetterFeedback {
    /// Palette color name used when painting this category
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            Self::Correct => "green",
            Self::Present => "yellow",
            Self::Absent => "gray",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, aligned positionally with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `solution`
    ///
    /// Duplicate letters are handled with a pool of the solution's letters:
    /// 1. First pass: mark exact position matches Correct and take them out of the pool
    /// 2. Second pass: mark remaining letters Present while the pool still holds them
    ///
    /// A letter is therefore never credited more times than it occurs in the
    /// solution, and exact matches always win over out-of-position ones.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let guess = Word::new("mount").unwrap();
    /// let solution = Word::new("about").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &solution);
    /// assert_eq!(feedback.letters(), &[Absent, Present, Present, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut pool = solution.letter_counts();

        // First pass: greens
        for (i, (&g, &s)) in guess.chars().iter().zip(solution.chars()).enumerate() {
            if g == s {
                result[i] = LetterFeedback::Correct;
                if let Some(count) = pool.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from whatever the greens left behind
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = pool.get_mut(&g)
                && *count > 0
            {
                result[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the positions in a given category
    #[must_use]
    pub fn count(&self, category: LetterFeedback) -> usize {
        self.0.iter().filter(|&&c| c == category).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterFeedback::Correct,
                'Y' | 'y' | '🟨' => LetterFeedback::Present,
                '-' | '_' | '⬜' => LetterFeedback::Absent,
                _ => return None,
            };
        }

        Some(Self(result))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
