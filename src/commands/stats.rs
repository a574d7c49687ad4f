//! Statistics from the save file

use crate::persistence::{PersistenceError, SaveData};
use crate::rules::StatsTracker;
use std::path::Path;
use tracing::info;

/// Statistics stored at `path`, or empty statistics if there is no save yet
///
/// # Errors
/// Returns `PersistenceError` if the file exists but cannot be read or
/// restored.
pub fn load_stats(path: &Path) -> Result<StatsTracker, PersistenceError> {
    if !path.exists() {
        info!(path = %path.display(), "no save file, statistics are empty");
        return Ok(StatsTracker::new());
    }
    let (_, stats) = SaveData::load(path)?.restore()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::WordList;
    use crate::game::Game;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_save_means_empty_stats() {
        let dir = tempdir().unwrap();
        let stats = load_stats(&dir.path().join("wordle-save.json")).unwrap();
        assert_eq!(stats, StatsTracker::new());
    }

    #[test]
    fn stats_come_from_saved_game() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wordle-save.json");

        let words = WordList::from_texts(&["crane", "slate"]);
        let mut game = Game::with_secret(words, Word::new("crane").unwrap(), false);
        game.submit_guess("slate").unwrap();
        game.submit_guess("crane").unwrap();
        game.save(&path).unwrap();

        let stats = load_stats(&path).unwrap();
        assert_eq!(stats.wins(), 1);
        assert_eq!(stats.distribution()[1], 1);
    }

    #[test]
    fn corrupt_save_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wordle-save.json");
        fs::write(&path, "[]").unwrap();
        assert!(load_stats(&path).is_err());
    }
}
