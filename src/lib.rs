//! Bowling scorer (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `bowling_score::{core,input,term,types}` and hosts the CLI configuration.

pub mod config;

pub use bowling_score_core as core;
pub use bowling_score_input as input;
pub use bowling_score_term as term;
pub use bowling_score_types as types;
