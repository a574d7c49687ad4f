//! Terminal output formatting
//!
//! Board, statistics and command results, colored with `colored`.

pub mod display;
pub mod formatters;

pub use display::{
    print_autoplay_summary, print_hint_report, write_board, write_hint, write_keyboard,
    write_share, write_stats,
};
