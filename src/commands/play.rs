//! Line-oriented play mode
//!
//! Reads one intent per line: a guess, or a `:command`. Generic over the
//! reader and writer so whole sessions can be scripted.

use crate::dictionary::Dictionary;
use crate::game::Game;
use crate::output::{write_board, write_hint, write_share, write_stats};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Guess(String),
    Hint,
    NewGame,
    ToggleHard,
    Stats,
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    Help,
    Quit,
    Unknown(String),
    Empty,
}

impl Intent {
    /// Parse a line of input
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::commands::Intent;
    ///
    /// assert_eq!(Intent::parse("crane"), Intent::Guess("crane".into()));
    /// assert_eq!(Intent::parse(":hint"), Intent::Hint);
    /// assert_eq!(Intent::parse("  "), Intent::Empty);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(command) = line.strip_prefix(':') else {
            return Self::Guess(line.to_string());
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let path = parts.next().map(PathBuf::from);
        match name.as_str() {
            "hint" | "h" => Self::Hint,
            "new" | "n" => Self::NewGame,
            "hard" => Self::ToggleHard,
            "stats" => Self::Stats,
            "save" => Self::Save(path),
            "load" => Self::Load(path),
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

const HELP: &str = "\
Type a 5-letter word to guess, or a command:
  :hint          suggest a word that fits the feedback so far
  :new           start a new round
  :hard          toggle hard mode
  :stats         show statistics
  :save [FILE]   save the game
  :load [FILE]   load a saved game
  :quit          leave";

/// Run an interactive session until `:quit` or end of input
///
/// Rejected guesses and failed saves or loads are reported to the player and
/// the session continues.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_play<D, R, W>(
    game: &mut Game<D>,
    save_path: &Path,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    D: Dictionary,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║            Wordle - Text Mode            ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    writeln!(out, "{HELP}")?;
    write_board(out, game.round())?;
    prompt(out)?;

    for line in input.lines() {
        match Intent::parse(&line?) {
            Intent::Empty => {}
            Intent::Quit => break,
            Intent::Guess(text) => match game.submit_guess(&text) {
                Ok(round) => {
                    write_board(out, round)?;
                    if round.status().is_terminal() {
                        write_share(out, round)?;
                        writeln!(out, "  Type :new to play again.")?;
                    }
                }
                Err(err) => writeln!(out, "{} {err}", "✗".red())?,
            },
            Intent::Hint => write_hint(out, &game.hint())?,
            Intent::NewGame => {
                writeln!(out, "\n🔄 New game started!")?;
                write_board(out, game.new_game())?;
            }
            Intent::ToggleHard => {
                let enabled = !game.round().hard_mode();
                game.set_hard_mode(enabled);
                writeln!(out, "Hard mode {}", if enabled { "on" } else { "off" })?;
            }
            Intent::Stats => write_stats(out, game.stats())?,
            Intent::Save(path) => {
                let path = path.as_deref().unwrap_or(save_path);
                match game.save(path) {
                    Ok(()) => writeln!(out, "✓ Saved to {}", path.display())?,
                    Err(err) => writeln!(out, "{} {err}", "✗".red())?,
                }
            }
            Intent::Load(path) => {
                let path = path.as_deref().unwrap_or(save_path);
                match game.load(path) {
                    Ok(round) => {
                        writeln!(out, "✓ Loaded {}", path.display())?;
                        write_board(out, round)?;
                    }
                    Err(err) => writeln!(out, "{} {err}", "✗".red())?,
                }
            }
            Intent::Help => writeln!(out, "{HELP}")?,
            Intent::Unknown(command) => {
                writeln!(out, "Unknown command {command}. Type :help for commands.")?;
            }
        }
        prompt(out)?;
    }

    writeln!(out, "\n👋 Thanks for playing!")?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
