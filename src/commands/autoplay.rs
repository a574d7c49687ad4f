//! Self-play evaluation
//!
//! Plays a full round against every answer word using nothing but the hint
//! engine, and aggregates the outcomes into statistics.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::hints::HintEngine;
use crate::rules::{RoundState, RoundStatus, StatsTracker};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::debug;

/// How one self-played round went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub secret: Word,
    pub guesses: Vec<Word>,
    pub solved: bool,
}

/// Outcomes of an autoplay run
#[derive(Debug)]
pub struct AutoplaySummary {
    /// One entry per secret, in dictionary order
    pub outcomes: Vec<RoundOutcome>,
    pub stats: StatsTracker,
    pub elapsed: Duration,
}

/// Options for [`run_autoplay`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoplayOptions {
    /// Play only the first `limit` answers
    pub limit: Option<usize>,
    pub hard_mode: bool,
    pub show_progress: bool,
}

/// Play one round against `secret`, always guessing the current hint
///
/// The round ends when it is won or lost, when no hint is left, or when the
/// hint is rejected (hard mode can refuse a word the hint filter allows).
pub fn play_round<D: Dictionary + ?Sized>(
    dictionary: &D,
    secret: &Word,
    hard_mode: bool,
) -> RoundOutcome {
    let engine = HintEngine::from_dictionary(dictionary);
    let mut state = RoundState::with_hard_mode(secret.clone(), hard_mode);
    // Per-round scratch counters; the caller aggregates outcomes itself
    let mut scratch = StatsTracker::new();

    while state.round().status() == RoundStatus::InProgress {
        let hint = engine.hint(state.round().attempts());
        let Some(word) = hint.word() else {
            debug!(%secret, "no hint left");
            break;
        };
        if let Err(err) = state.submit_guess(word.text(), dictionary, &mut scratch) {
            debug!(%secret, guess = %word, error = %err, "hint rejected");
            break;
        }
    }

    RoundOutcome {
        secret: secret.clone(),
        guesses: state
            .round()
            .attempts()
            .iter()
            .map(|attempt| attempt.guess().clone())
            .collect(),
        solved: state.round().status() == RoundStatus::Won,
    }
}

/// Self-play every answer (or the first `limit`) in parallel
pub fn run_autoplay<D: Dictionary + Sync + ?Sized>(
    dictionary: &D,
    options: AutoplayOptions,
) -> AutoplaySummary {
    let secrets = dictionary.all_candidate_words();
    let secrets = &secrets[..options.limit.unwrap_or(secrets.len()).min(secrets.len())];

    let pb = if options.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let outcomes: Vec<RoundOutcome> = secrets
        .par_iter()
        .map(|secret| {
            let outcome = play_round(dictionary, secret, options.hard_mode);
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut stats = StatsTracker::new();
    for outcome in &outcomes {
        if outcome.solved {
            stats.record_win(outcome.guesses.len());
        } else {
            stats.record_loss();
        }
    }

    AutoplaySummary {
        outcomes,
        stats,
        elapsed: start.elapsed(),
    }
}
