//! Formatting utilities for terminal output

use crate::core::{Attempt, LetterMark};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile
#[must_use]
pub fn tile(letter: u8, mark: LetterMark) -> ColoredString {
    let text = format!(" {} ", char::from(letter));
    match mark {
        LetterMark::Exact => text.black().on_green().bold(),
        LetterMark::Present => text.black().on_yellow().bold(),
        LetterMark::Absent => text.white().on_bright_black(),
    }
}

/// A whole attempt as a row of colored tiles
#[must_use]
pub fn format_attempt(attempt: &Attempt) -> String {
    attempt
        .guess()
        .chars()
        .iter()
        .zip(attempt.feedback().marks())
        .map(|(&letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

/// An unused row of the board
#[must_use]
pub fn empty_row() -> String {
    " _ ".repeat(crate::core::WORD_LEN).bright_black().to_string()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        let filled = ((value / max) * width as f64).max(0.0) as usize;
        filled.min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
