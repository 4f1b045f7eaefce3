//! Pin-count input module.
//!
//! Maps lines of text into [`crate::types::GameCommand`]s and provides a
//! prompt loop that keeps asking until a line parses. Nothing here knows
//! about scoring; the game decides whether a well-formed shot is legal.

pub mod handler;
pub mod map;

pub use bowling_score_types as types;

pub use handler::{PinPrompt, PROMPT, RETRY_MESSAGE};
pub use map::{parse_command, should_quit};
