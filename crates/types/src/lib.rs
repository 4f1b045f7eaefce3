//! Core types module - shared constants and commands
//!
//! This module defines the fundamental values used throughout the workspace.
//! Everything here is plain data with no external dependencies, usable from
//! the scoring core, the scoreboard renderer and the input layer alike.
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_COUNT` | 10 | Frames in one game (indexed 0-9) |
//! | `LAST_FRAME` | 9 | Index of the tenth frame |
//! | `MAX_PINS` | 10 | Pins standing at the start of a frame |
//! | `MAX_SHOTS_PER_FRAME` | 3 | Tenth frame: two shots plus a fill ball |
//!
//! # Scoreboard Layout
//!
//! Each frame is drawn as a fixed-width cell that starts with
//! [`FRAME_SEPARATOR`]. Regular frames take [`FRAME_CELL_WIDTH`] columns,
//! the tenth takes [`TENTH_CELL_WIDTH`], and a line ends with one more
//! separator:
//!
//! ```text
//! |  X  | 7 / | 9 0 |  X  | 0 8 | 8 / | 0 6 |  X  |  X  | X 8 1 |
//! |  20 |  39 |  48 |  66 |  74 |  84 |  90 | 120 | 148 |   167 |
//! ```
//!
//! # Examples
//!
//! ```
//! use bowling_score_types::{GameCommand, FRAME_COUNT, MAX_PINS, SCOREBOARD_WIDTH};
//!
//! assert_eq!(GameCommand::from_str("7"), Some(GameCommand::Shot(7)));
//! assert_eq!(GameCommand::from_str("Reset"), Some(GameCommand::Reset));
//! assert_eq!(GameCommand::from_str("seven"), None);
//!
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(MAX_PINS, 10);
//! assert_eq!(SCOREBOARD_WIDTH, 63);
//! ```

/// Frames in one game.
pub const FRAME_COUNT: usize = 10;

/// Index of the tenth frame, the only one that can take fill balls.
pub const LAST_FRAME: usize = FRAME_COUNT - 1;

/// Pins racked at the start of every frame.
pub const MAX_PINS: u8 = 10;

/// Shots a tenth frame can hold (two regular shots plus one fill ball, or a
/// strike plus two fill balls).
pub const MAX_SHOTS_PER_FRAME: usize = 3;

/// Highest possible game total.
pub const PERFECT_SCORE: u16 = 300;

/// Display width of frames 0-8, separator included.
pub const FRAME_CELL_WIDTH: usize = 6;

/// Display width of the tenth frame, separator included.
pub const TENTH_CELL_WIDTH: usize = 8;

/// Full scoreboard line width: nine regular cells, the tenth cell and the
/// closing separator.
pub const SCOREBOARD_WIDTH: usize = LAST_FRAME * FRAME_CELL_WIDTH + TENTH_CELL_WIDTH + 1;

/// Leading character of every frame cell and the end of a line.
pub const FRAME_SEPARATOR: char = '|';

/// Marker drawn for a ten on the first ball of a rack.
pub const STRIKE_MARK: char = 'X';

/// Marker drawn in place of the ball that completes a spare.
pub const SPARE_MARK: char = '/';

/// Border drawn above and below the scoreboard.
pub const BORDER_MARK: char = '=';


/// Commands a caller can feed into a game.
///
/// `Shot` carries the raw integer as typed; range checks belong to the
/// scorer, not the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCommand {
    Shot(i32),
    Reset,
    Quit,
}

impl GameCommand {
    /// Parse a command from a line of text (case-insensitive, surrounding
    /// whitespace ignored).
    ///
    /// # Examples
    ///
    /// ```
    /// use bowling_score_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("q"), Some(GameCommand::Quit));
    /// assert_eq!(GameCommand::from_str("11"), Some(GameCommand::Shot(11)));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(pins) = s.parse::<i32>() {
            return Some(GameCommand::Shot(pins));
        }
        match s.to_lowercase().as_str() {
            "r" | "reset" => Some(GameCommand::Reset),
            "q" | "quit" | "exit" => Some(GameCommand::Quit),
            _ => None,
        }
    }
}
