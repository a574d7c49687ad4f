//! Wordle - CLI
//!
//! Play in the terminal, ask for hints on a game played elsewhere, inspect
//! saved statistics, or let the hint engine play every answer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use tracing::info;
use wordle_engine::{
    commands::{AutoplayOptions, load_stats, run_autoplay, run_play, suggest},
    config::{DEFAULT_LOG_LEVEL, DEFAULT_SAVE_FILE, GameConfig},
    dictionary::WordList,
    game::Game,
    logging::init_logging,
    output::{print_autoplay_summary, print_hint_report, write_stats},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Five-letter word guessing game with hard mode, hints and statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start in hard mode: revealed hints must be used in later guesses
    #[arg(long, global = true)]
    hard: bool,

    /// Accept any five-letter word as a guess
    #[arg(long, global = true)]
    permissive: bool,

    /// Directory with valid*/answers* word files (default: built-in lists)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Save file for :save, :load and the stats command
    #[arg(short, long, global = true, default_value = DEFAULT_SAVE_FILE)]
    save: PathBuf,

    /// Log level or filter directive; RUST_LOG takes precedence
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Suggest a word from feedback already received
    Hint {
        /// Played guesses as WORD:FEEDBACK, e.g. CRANE:--Y-G
        guesses: Vec<String>,
    },

    /// Show statistics from the save file
    Stats,

    /// Let the hint engine play every answer
    Autoplay {
        /// Limit number of words to play
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            hard_mode: self.hard,
            permissive: self.permissive,
            words_dir: self.words.clone(),
            save_path: self.save.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_logging(&config.log_level)?;

    let dictionary = config.load_dictionary();
    info!(
        answers = dictionary.len(),
        valid = dictionary.valid_count(),
        permissive = dictionary.is_permissive(),
        "dictionary ready"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary, &config),
        Commands::Hint { guesses } => run_hint_command(&dictionary, &guesses),
        Commands::Stats => run_stats_command(&config),
        Commands::Autoplay { limit } => run_autoplay_command(&dictionary, limit, config.hard_mode),
    }
}

fn run_play_command(dictionary: WordList, config: &GameConfig) -> Result<()> {
    let mut game = Game::new(dictionary, config.hard_mode);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut game, &config.save_path, stdin.lock(), &mut stdout)
        .context("terminal I/O failed")
}

fn run_hint_command(dictionary: &WordList, guesses: &[String]) -> Result<()> {
    let report = suggest(dictionary, guesses)?;
    print_hint_report(&report).context("writing hint report")
}

fn run_stats_command(config: &GameConfig) -> Result<()> {
    let stats = load_stats(&config.save_path)
        .with_context(|| format!("reading statistics from {}", config.save_path.display()))?;
    write_stats(&mut io::stdout(), &stats)?;
    Ok(())
}

fn run_autoplay_command(dictionary: &WordList, limit: Option<usize>, hard_mode: bool) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Wordle Self-Play ");
    println!("{}", "═".repeat(70));
    println!(
        "\nPlaying {} answers{}",
        limit.map_or(dictionary.len(), |l| l.min(dictionary.len())),
        if hard_mode { " in hard mode" } else { "" }
    );
    println!("{}", "Every guess is the hint engine's suggestion.".bright_black());

    let summary = run_autoplay(
        dictionary,
        AutoplayOptions {
            limit,
            hard_mode,
            show_progress: true,
        },
    );
    print_autoplay_summary(&summary).context("writing autoplay summary")
}
