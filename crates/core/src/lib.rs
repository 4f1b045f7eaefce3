//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate contains the bowling rules, the per-frame state and the game
//! state machine. It has **no dependencies** on terminals or input streams:
//!
//! - **Deterministic**: the same balls always produce the same score sheet
//! - **Side-effect free on error**: a rejected ball never changes the game
//! - **Owned state**: each [`Game`] is an independent value; nothing is global
//!
//! # Module Structure
//!
//! - [`frame`]: tagged per-frame shot states, including the tenth frame's fill balls
//! - [`validator`]: legality of the next ball for a frame
//! - [`scoring`]: committing balls and crediting strike/spare bonuses
//! - [`game_state`]: the frame cursor, game-over detection and the public API
//! - [`snapshot`]: serializable read model used by renderers
//!
//! # Example
//!
//! ```
//! use bowling_score_core::{Game, ShotError, ShotMark};
//!
//! let mut game = Game::new();
//! assert_eq!(game.add_shot(10), Ok(ShotMark::Strike));
//! game.add_shot(6).unwrap();
//! assert_eq!(
//!     game.add_shot(5),
//!     Err(ShotError::InvalidPinCount { pins: 5, max: 4 })
//! );
//! assert_eq!(game.add_shot(4), Ok(ShotMark::Spare));
//! assert_eq!(game.total_score(), 30);
//!
//! game.reset();
//! assert_eq!(game.total_score(), 0);
//! assert!(!game.is_over());
//! ```

pub mod error;
pub mod frame;
pub mod game_state;
pub mod scoring;
pub mod snapshot;
pub mod validator;

pub use bowling_score_types as types;

pub use error::ShotError;
pub use frame::{Frame, FrameState};
pub use game_state::{Cursor, Game};
pub use scoring::ShotMark;
pub use snapshot::{FrameSnapshot, GameSnapshot};
