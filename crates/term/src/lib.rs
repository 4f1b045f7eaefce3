//! Terminal scoreboard module.
//!
//! Turns game snapshots into the two fixed-width scoreboard lines (pins and
//! running totals) and prints them to a terminal.
//!
//! - [`scoreboard`]: pure string rendering, no I/O
//! - [`renderer`]: crossterm-based printer with strike/spare highlighting

pub mod renderer;
pub mod scoreboard;

pub use bowling_score_core as core;
pub use bowling_score_types as types;

pub use renderer::{encode_scoreboard_into, ScoreboardPrinter};
pub use scoreboard::{
    border_line, pins_line, render_pins, render_pins_line, render_score, render_score_line,
    score_line, status_line,
};
