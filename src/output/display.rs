//! Rendering of game snapshots and command results

use super::formatters::{create_progress_bar, empty_row, format_attempt, tile};
use crate::commands::{AutoplaySummary, HintReport};
use crate::hints::Hint;
use crate::rules::{MAX_TURNS, Round, RoundStatus, StatsTracker};
use colored::Colorize;
use std::io::{self, Write};

const BAR_WIDTH: usize = 30;

/// Keyboard rows with their indent
const KEYBOARD_ROWS: [(usize, &str); 3] = [(0, "QWERTYUIOP"), (1, "ASDFGHJKL"), (4, "ZXCVBNM")];

/// Draw the board: one row per attempt, blank rows for the turns left
///
/// # Errors
/// Returns any error from the writer.
pub fn write_board<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(out)?;
    for attempt in round.attempts() {
        writeln!(out, "  {}", format_attempt(attempt))?;
    }
    for _ in 0..round.remaining_turns() {
        writeln!(out, "  {}", empty_row())?;
    }

    let mode = if round.hard_mode() { "hard" } else { "normal" };
    writeln!(
        out,
        "\n  Turn {}/{MAX_TURNS} | {mode} mode",
        round.turn()
    )?;

    match round.status() {
        RoundStatus::Won => writeln!(
            out,
            "  {}",
            format!(
                "Solved in {} {}!",
                round.turn(),
                if round.turn() == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        RoundStatus::Lost => writeln!(
            out,
            "  {} {}",
            "Out of turns. The word was".red(),
            round.secret().to_string().bright_yellow().bold()
        ),
        RoundStatus::InProgress => Ok(()),
    }?;

    writeln!(out)?;
    write_keyboard(out, round)
}

/// Draw the keyboard, each guessed key colored by its best mark so far
///
/// # Errors
/// Returns any error from the writer.
pub fn write_keyboard<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    let marks = round.letter_marks();
    for (indent, row) in KEYBOARD_ROWS {
        let keys: String = row
            .bytes()
            .map(|letter| match marks.get(&letter) {
                Some(&mark) => tile(letter, mark).to_string(),
                None => format!(" {} ", char::from(letter)),
            })
            .collect();
        writeln!(out, "  {}{keys}", " ".repeat(indent))?;
    }
    Ok(())
}

/// Emoji summary of a finished round, one line per attempt
///
/// # Errors
/// Returns any error from the writer.
pub fn write_share<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    let score = match round.status() {
        RoundStatus::Won => round.turn().to_string(),
        RoundStatus::Lost | RoundStatus::InProgress => "X".to_string(),
    };
    writeln!(out, "\n  Wordle {score}/{MAX_TURNS}")?;
    for attempt in round.attempts() {
        writeln!(out, "  {}", attempt.feedback().to_emoji())?;
    }
    Ok(())
}

/// Print statistics with a guess distribution chart
///
/// # Errors
/// Returns any error from the writer.
pub fn write_stats<W: Write>(out: &mut W, stats: &StatsTracker) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics".bright_cyan().bold())?;
    writeln!(out, "  Played:         {}", stats.played())?;
    writeln!(out, "  Win %:          {:.1}", stats.win_percentage())?;
    writeln!(out, "  Current streak: {}", stats.current_streak())?;
    writeln!(out, "  Best streak:    {}", stats.best_streak())?;
    if let Some(average) = stats.average_attempts() {
        writeln!(out, "  Average:        {average:.2} guesses")?;
    }

    writeln!(out, "\n📈 {}", "Guess Distribution".bright_cyan().bold())?;
    let max_count = stats.distribution().iter().copied().max().unwrap_or(0);
    for (index, &count) in stats.distribution().iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max_count), BAR_WIDTH);
        writeln!(out, "  {}: {} {count}", index + 1, bar.green())?;
    }
    Ok(())
}

/// Print a hint line
///
/// # Errors
/// Returns any error from the writer.
pub fn write_hint<W: Write>(out: &mut W, hint: &Hint) -> io::Result<()> {
    match hint {
        Hint::Suggestion { word, remaining } => writeln!(
            out,
            "💡 Hint: {} ({remaining} candidate{} left)",
            word.to_string().bright_yellow().bold(),
            if *remaining == 1 { "" } else { "s" }
        ),
        Hint::Unavailable => writeln!(
            out,
            "💡 Hint: {} (no candidate fits the feedback)",
            hint.to_string().bright_black()
        ),
    }
}

/// Print the result of the `hint` command
///
/// # Errors
/// Returns any error writing to stdout.
pub fn print_hint_report(report: &HintReport) -> io::Result<()> {
    write_hint_report(&mut io::stdout().lock(), report)
}

fn write_hint_report<W: Write>(out: &mut W, report: &HintReport) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    for attempt in &report.history {
        let feedback = attempt.feedback();
        writeln!(
            out,
            "  {}  {feedback}  ({} exact, {} present)",
            format_attempt(attempt),
            feedback.count_exact(),
            feedback.count_present()
        )?;
    }
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    write_hint(out, &report.hint)?;

    if !report.sample.is_empty() {
        writeln!(out, "\nRemaining candidates:")?;
        for word in &report.sample {
            writeln!(out, "  • {word}")?;
        }
        if report.hint.remaining() > report.sample.len() {
            writeln!(
                out,
                "  … and {} more",
                report.hint.remaining() - report.sample.len()
            )?;
        }
    }
    Ok(())
}

/// Print autoplay statistics
///
/// # Errors
/// Returns any error writing to stdout.
pub fn print_autoplay_summary(summary: &AutoplaySummary) -> io::Result<()> {
    write_autoplay_summary(&mut io::stdout().lock(), summary)
}

fn write_autoplay_summary<W: Write>(out: &mut W, summary: &AutoplaySummary) -> io::Result<()> {
    let stats = &summary.stats;

    writeln!(out, "\n{}", "═".repeat(70))?;
    writeln!(out, " Autoplay Results ")?;
    writeln!(out, "{}", "═".repeat(70))?;

    writeln!(out, "\n📊 {}", "Overall Performance".bright_cyan().bold())?;
    writeln!(out, "  Rounds played:       {}", stats.played())?;
    writeln!(
        out,
        "  Solved:              {} {}",
        stats.wins(),
        format!("({:.1}%)", stats.win_percentage()).green()
    )?;
    if stats.losses() > 0 {
        writeln!(
            out,
            "  Failed:              {} {}",
            stats.losses(),
            format!("({:.1}%)", 100.0 - stats.win_percentage()).red()
        )?;
    }
    if let Some(average) = stats.average_attempts() {
        writeln!(
            out,
            "  Average guesses:     {}",
            format!("{average:.3}").bright_yellow().bold()
        )?;
    }
    writeln!(
        out,
        "  Total time:          {:.2}s",
        summary.elapsed.as_secs_f64()
    )?;
    if stats.played() > 0 {
        writeln!(
            out,
            "  Time per round:      {:.1}ms",
            summary.elapsed.as_millis() as f64 / f64::from(stats.played())
        )?;
    }

    write_stats(out, stats)?;

    let failures: Vec<_> = summary.outcomes.iter().filter(|o| !o.solved).collect();
    if !failures.is_empty() {
        writeln!(out, "\n😰 {}", "Unsolved Words".yellow().bold())?;
        for outcome in failures.iter().take(10) {
            writeln!(
                out,
                "  {} after {} guesses",
                outcome.secret.to_string().yellow(),
                outcome.guesses.len()
            )?;
        }
    }
    Ok(())
}
