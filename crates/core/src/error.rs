//! Errors surfaced by the scorer.

use thiserror::Error;

/// A shot the game refused to record.
///
/// Both variants are recoverable: the game is left exactly as it was before
/// the call, so the caller can re-prompt and try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ShotError {
    /// Pin count outside `0..=max` for the slot being thrown.
    #[error(
        "invalid number of pins: {pins} (enter 0 to {max}; a frame holds at most 10 pins, \
         except for the tenth frame's fill balls)"
    )]
    InvalidPinCount { pins: i32, max: u8 },

    /// The tenth frame is complete; nothing more can be thrown.
    #[error("the game is over")]
    GameAlreadyOver,
}
