//! Snapshot module - a serializable read model of the score sheet
//!
//! Renderers and external consumers work from snapshots rather than from
//! [`crate::Game`] itself, so they can never mutate a game.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::types::{FRAME_COUNT, MAX_SHOTS_PER_FRAME};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Pin counts in the order thrown, fill balls included.
    pub shots: ArrayVec<u8, MAX_SHOTS_PER_FRAME>,
    pub score: u16,
    pub bonus_owed: u8,
    /// Running total shown under the frame; `None` until the frame closes.
    pub display_total: Option<u16>,
}

impl FrameSnapshot {
    pub fn fill_from(&mut self, frame: &Frame) {
        self.shots = frame.shots();
        self.score = frame.score();
        self.bonus_owed = frame.bonus_owed();
        self.display_total = frame.display_total();
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }
}

impl From<&Frame> for FrameSnapshot {
    fn from(value: &Frame) -> Self {
        let mut s = Self::default();
        s.fill_from(value);
        s
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub frames: [FrameSnapshot; FRAME_COUNT],
    /// -1 before the first ball, 0-9 while playing, 10 once finished.
    pub cursor: i8,
    pub total_score: u16,
    pub is_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        for frame in &mut self.frames {
            *frame = FrameSnapshot::default();
        }
        self.cursor = -1;
        self.total_score = 0;
        self.is_over = false;
    }

    pub fn playable(&self) -> bool {
        !self.is_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            frames: Default::default(),
            cursor: -1,
            total_score: 0,
            is_over: false,
        };
        s.clear();
        s
    }
}
