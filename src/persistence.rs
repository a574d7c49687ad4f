//! Save files
//!
//! A save file is a JSON snapshot of the current round plus the statistics.
//! Loading validates everything before handing back live state, so a
//! hand-edited or truncated file can never produce an impossible round.

use crate::core::{Attempt, Feedback, Word};
use crate::rules::{MAX_TURNS, RestoreError, Round, RoundState, StatsError, StatsTracker};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Current save format
pub const SAVE_VERSION: u32 = 1;

/// Everything needed to resume a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub secret: Word,
    pub guesses: Vec<Word>,
    pub feedback: Vec<Feedback>,
    pub turn: usize,
    #[serde(default)]
    pub hard_mode: bool,
    #[serde(default)]
    pub stats: SavedStats,
}

/// Statistics counters as written to disk
///
/// Turned back into a [`StatsTracker`] only after the counters are checked
/// against each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedStats {
    pub played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub distribution: [u32; MAX_TURNS],
}

impl From<&StatsTracker> for SavedStats {
    fn from(stats: &StatsTracker) -> Self {
        Self {
            played: stats.played(),
            wins: stats.wins(),
            current_streak: stats.current_streak(),
            best_streak: stats.best_streak(),
            distribution: *stats.distribution(),
        }
    }
}

impl TryFrom<SavedStats> for StatsTracker {
    type Error = StatsError;

    fn try_from(saved: SavedStats) -> Result<Self, Self::Error> {
        Self::from_counters(
            saved.played,
            saved.wins,
            saved.current_streak,
            saved.best_streak,
            saved.distribution,
        )
    }
}

/// Failure to write, read or apply a save file
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("cannot access save file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported save format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("save has {guesses} guesses but {feedback} feedback rows")]
    LengthMismatch { guesses: usize, feedback: usize },
    #[error("save records turn {turn} but has {guesses} guesses")]
    TurnMismatch { turn: usize, guesses: usize },
    #[error("invalid round in save: {0}")]
    Restore(#[from] RestoreError),
    #[error("invalid statistics in save: {0}")]
    Stats(#[from] StatsError),
}

impl SaveData {
    /// Snapshot a round and the statistics
    #[must_use]
    pub fn capture(round: &Round, stats: &StatsTracker) -> Self {
        let (guesses, feedback) = round
            .attempts()
            .iter()
            .map(|attempt| (attempt.guess().clone(), *attempt.feedback()))
            .unzip();

        Self {
            version: SAVE_VERSION,
            secret: round.secret().clone(),
            guesses,
            feedback,
            turn: round.turn(),
            hard_mode: round.hard_mode(),
            stats: SavedStats::from(stats),
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse JSON without validating the contents
    ///
    /// # Errors
    /// Returns an error if the JSON does not have the save file shape.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Write to `path`, creating parent directories as needed
    ///
    /// # Errors
    /// Returns `PersistenceError::Io` on filesystem failures.
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let io_err = |source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let json = self.to_json()?;
        fs::write(path, json).map_err(io_err)?;
        info!(path = %path.display(), turn = self.turn, "game saved");
        Ok(())
    }

    /// Read from `path`
    ///
    /// # Errors
    /// Returns `PersistenceError::Io` if the file cannot be read, or
    /// `PersistenceError::Json` if it is not a save file.
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        let json = fs::read_to_string(path).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }

    /// Turn the snapshot back into live state
    ///
    /// The round's status is re-derived from its history; statistics are
    /// taken as saved, after a consistency check.
    ///
    /// # Errors
    /// Returns the first problem found: wrong version, guesses and feedback
    /// of different lengths, a turn count that disagrees with the guesses,
    /// an impossible history, or inconsistent statistics.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    /// use wordle_engine::dictionary::WordList;
    /// use wordle_engine::persistence::SaveData;
    /// use wordle_engine::rules::{RoundState, StatsTracker};
    ///
    /// let words = WordList::from_texts(&["crane", "slate"]);
    /// let mut state = RoundState::new(Word::new("crane").unwrap());
    /// let mut stats = StatsTracker::new();
    /// state.submit_guess("slate", &words, &mut stats).unwrap();
    ///
    /// let json = SaveData::capture(state.round(), &stats).to_json().unwrap();
    /// let (restored, _) = SaveData::from_json(&json).unwrap().restore().unwrap();
    /// assert_eq!(restored.round(), state.round());
    /// ```
    pub fn restore(self) -> Result<(RoundState, StatsTracker), PersistenceError> {
        let result = self.restore_checked();
        if let Err(err) = &result {
            warn!(error = %err, "rejected saved game");
        }
        result
    }

    fn restore_checked(self) -> Result<(RoundState, StatsTracker), PersistenceError> {
        if self.version != SAVE_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: self.version,
                expected: SAVE_VERSION,
            });
        }
        if self.guesses.len() != self.feedback.len() {
            return Err(PersistenceError::LengthMismatch {
                guesses: self.guesses.len(),
                feedback: self.feedback.len(),
            });
        }
        if self.turn != self.guesses.len() {
            return Err(PersistenceError::TurnMismatch {
                turn: self.turn,
                guesses: self.guesses.len(),
            });
        }
        let stats = StatsTracker::try_from(self.stats)?;

        let attempts = self
            .guesses
            .into_iter()
            .zip(self.feedback)
            .map(|(guess, feedback)| Attempt::new(guess, feedback))
            .collect();
        let state = RoundState::restore(self.secret, self.hard_mode, attempts)?;

        Ok((state, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;
    use crate::rules::RoundStatus;
    use tempfile::tempdir;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn played(secret: &str, guesses: &[&str], hard_mode: bool) -> (RoundState, StatsTracker) {
        let words = WordList::from_texts(&[
            "crane", "crown", "crank", "slate", "irate", "trace", "crate", "grate", "about",
        ]);
        let mut state = RoundState::with_hard_mode(word(secret), hard_mode);
        let mut stats = StatsTracker::new();
        stats.record_win(3);
        stats.record_loss();
        for guess in guesses {
            state.submit_guess(guess, &words, &mut stats).unwrap();
        }
        (state, stats)
    }

    #[test]
    fn round_trip_through_json() {
        let (state, stats) = played("crane", &["crown", "crank"], true);
        let json = SaveData::capture(state.round(), &stats).to_json().unwrap();

        assert!(json.contains("\"secret\": \"CRANE\""));
        assert!(json.contains("\"hard_mode\": true"));

        let (restored, restored_stats) = SaveData::from_json(&json).unwrap().restore().unwrap();
        assert_eq!(restored.round(), state.round());
        assert_eq!(restored.round().status(), RoundStatus::InProgress);
        assert_eq!(restored.round().turn(), 2);
        assert_eq!(restored_stats, stats);
    }

    #[test]
    fn finished_round_restores_terminal_status_without_recounting() {
        let (state, stats) = played("crane", &["slate", "crane"], false);
        assert_eq!(stats.played(), 3);

        let (restored, restored_stats) = SaveData::capture(state.round(), &stats)
            .restore()
            .unwrap();
        assert_eq!(restored.round().status(), RoundStatus::Won);
        assert_eq!(restored_stats.played(), 3);
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("wordle-save.json");
        let (state, stats) = played("crane", &["slate"], false);

        let data = SaveData::capture(state.round(), &stats);
        data.save(&path).unwrap();

        let loaded = SaveData::load(&path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn loading_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = SaveData::load(&path).unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(SaveData::from_json("{ not json").is_err());

        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, r#"{"version": 1, "secret": "CR4NE"}"#).unwrap();
        assert!(matches!(
            SaveData::load(&path),
            Err(PersistenceError::Json(_))
        ));
    }

    #[test]
    fn restore_rejects_inconsistent_snapshots() {
        let (state, stats) = played("crane", &["slate", "crown"], false);
        let data = SaveData::capture(state.round(), &stats);

        let mut wrong_version = data.clone();
        wrong_version.version = 99;
        assert!(matches!(
            wrong_version.restore(),
            Err(PersistenceError::UnsupportedVersion { found: 99, .. })
        ));

        let mut short_feedback = data.clone();
        short_feedback.feedback.pop();
        assert!(matches!(
            short_feedback.restore(),
            Err(PersistenceError::LengthMismatch {
                guesses: 2,
                feedback: 1
            })
        ));

        let mut wrong_turn = data.clone();
        wrong_turn.turn = 5;
        assert!(matches!(
            wrong_turn.restore(),
            Err(PersistenceError::TurnMismatch { turn: 5, guesses: 2 })
        ));

        let mut forged = data.clone();
        forged.feedback[0] = Feedback::PERFECT;
        assert!(matches!(
            forged.restore(),
            Err(PersistenceError::Restore(RestoreError::FeedbackMismatch { index: 0, .. }))
        ));

        let mut bad_stats = data;
        bad_stats.stats.wins = bad_stats.stats.played + 1;
        assert!(matches!(
            bad_stats.restore(),
            Err(PersistenceError::Stats(StatsError::WinsExceedPlayed { .. }))
        ));
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "version": 1,
            "secret": "CRANE",
            "guesses": ["SLATE"],
            "feedback": [["ABSENT", "ABSENT", "EXACT", "ABSENT", "EXACT"]],
            "turn": 1
        }"#;
        let (state, stats) = SaveData::from_json(json).unwrap().restore().unwrap();
        assert!(!state.round().hard_mode());
        assert_eq!(state.round().turn(), 1);
        assert_eq!(stats, StatsTracker::new());
    }

    #[test]
    fn stats_are_stored_as_plain_counters() {
        let (state, stats) = played("crane", &["slate", "crane"], false);
        let data = SaveData::capture(state.round(), &stats);
        assert_eq!(
            data.stats,
            SavedStats {
                played: 3,
                wins: 2,
                current_streak: 1,
                best_streak: 1,
                distribution: [0, 1, 1, 0, 0, 0],
            }
        );

        let json = data.to_json().unwrap();
        assert!(json.contains("\"best_streak\": 1"));
        let (_, restored) = SaveData::from_json(&json).unwrap().restore().unwrap();
        assert_eq!(restored, stats);
    }
}
