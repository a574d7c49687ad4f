//! Session configuration

use crate::dictionary::{WordList, load_word_list};
use std::path::PathBuf;

/// Save file used when none is given
pub const DEFAULT_SAVE_FILE: &str = "wordle-save.json";

/// Log level used when neither the command line nor `RUST_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings shared by every subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Start rounds in hard mode
    pub hard_mode: bool,
    /// Accept any well-formed word as a guess
    pub permissive: bool,
    /// Directory of word files; the embedded lists when `None`
    pub words_dir: Option<PathBuf>,
    pub save_path: PathBuf,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hard_mode: false,
            permissive: false,
            words_dir: None,
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl GameConfig {
    /// Build the dictionary this configuration asks for
    #[must_use]
    pub fn load_dictionary(&self) -> WordList {
        let words = self
            .words_dir
            .as_deref()
            .map_or_else(WordList::embedded, load_word_list);
        words.permissive(self.permissive)
    }
}
