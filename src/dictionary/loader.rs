//! Word list loading from disk
//!
//! A word directory holds plain text files with one word per line. Files
//! whose name starts with `valid` add guessable words; files starting with
//! `answers` add secrets (which are guessable too). Anything else is ignored.

use super::WordList;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Load words from a file
///
/// Blank lines and lines that are not well-formed words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_engine::dictionary::loader::load_from_file;
///
/// let words = load_from_file("words/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_engine::dictionary::loader::words_from_slice;
/// use wordle_engine::dictionary::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s.trim()).ok()).collect()
}

fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// What a file contributes, decided by its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Valid,
    Answers,
}

fn classify(path: &Path) -> Option<ListKind> {
    let name = path.file_name()?.to_str()?.to_ascii_lowercase();
    if name.starts_with("valid") {
        Some(ListKind::Valid)
    } else if name.starts_with("answers") {
        Some(ListKind::Answers)
    } else {
        None
    }
}

/// Load a word list from a directory, falling back to the embedded lists
///
/// Files are read in file-name order so the answer order is stable between
/// runs. Unreadable files are logged and skipped. If no word at all could be
/// loaded the embedded lists are used instead.
#[must_use]
pub fn load_word_list(dir: &Path) -> WordList {
    match read_directory(dir) {
        Ok((valid, answers)) if !valid.is_empty() || !answers.is_empty() => {
            info!(
                dir = %dir.display(),
                valid = valid.len(),
                answers = answers.len(),
                "word list loaded"
            );
            WordList::new(valid, answers)
        }
        Ok(_) => {
            warn!(dir = %dir.display(), "no words found, using embedded word list");
            WordList::embedded()
        }
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "cannot read word directory, using embedded word list");
            WordList::embedded()
        }
    }
}

fn read_directory(dir: &Path) -> io::Result<(Vec<Word>, Vec<Word>)> {
    let mut files: Vec<(PathBuf, ListKind)> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| classify(&path).map(|kind| (path, kind)))
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut valid = Vec::new();
    let mut answers = Vec::new();
    for (path, kind) in files {
        match load_from_file(&path) {
            Ok(words) => {
                debug!(file = %path.display(), count = words.len(), ?kind, "read word file");
                match kind {
                    ListKind::Valid => valid.extend(words),
                    ListKind::Answers => answers.extend(words),
                }
            }
            Err(err) => warn!(file = %path.display(), error = %err, "skipping unreadable word file"),
        }
    }

    Ok((valid, answers))
}
