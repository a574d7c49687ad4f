//! Wordle Engine
//!
//! Rules engine for the five-letter word-guessing game: feedback scoring
//! with duplicate letters, hard mode, round and statistics bookkeeping, and
//! a hint engine that narrows and ranks the remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::Word;
//! use wordle_engine::dictionary::WordList;
//! use wordle_engine::game::Game;
//!
//! let words = WordList::embedded();
//! let mut game = Game::with_secret(words, Word::new("crane").unwrap(), false);
//!
//! let round = game.submit_guess("slate").unwrap();
//! let feedback = round.last_attempt().unwrap().feedback();
//! assert_eq!(feedback.to_string(), "--G-G");
//!
//! println!("Hint: {}", game.hint());
//! ```

// Core domain types
pub mod core;

// Round rules, hard mode and statistics
pub mod rules;

// Candidate filtering and ranking
pub mod hints;

// Word lists
pub mod dictionary;

// Save files
pub mod persistence;

// Playing session
pub mod game;

pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
