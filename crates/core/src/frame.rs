//! Frame module - what has been thrown in each frame
//!
//! A frame's shots are tracked as an explicit state rather than as slots
//! holding a "not thrown yet" marker. Frames 0-8 move through
//! `Empty -> OneShot -> Open | Spare` or `Empty -> Strike`. The tenth frame
//! uses the same states for its first rack, but `Strike` and `Spare` stay
//! open there and continue into the fill-ball states:
//!
//! ```text
//! Empty ─10─> Strike ──> StrikeOneBonus ──> StrikeTwoBonus   (done)
//!   │
//!   └─n──> OneShot ─(sum 10)─> Spare ──> SpareBonus          (done)
//!              │
//!              └─(sum < 10)─> Open                            (done)
//! ```

use arrayvec::ArrayVec;

use crate::types::{MAX_PINS, MAX_SHOTS_PER_FRAME};

/// Shots recorded in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrameState {
    #[default]
    Empty,
    /// First ball thrown, pins still standing.
    OneShot(u8),
    /// Two balls, fewer than ten pins in total.
    Open(u8, u8),
    /// Two balls clearing the rack; holds the first ball.
    Spare(u8),
    Strike,
    /// Tenth frame: spare plus its fill ball.
    SpareBonus(u8, u8),
    /// Tenth frame: strike plus the first fill ball.
    StrikeOneBonus(u8),
    /// Tenth frame: strike plus both fill balls.
    StrikeTwoBonus(u8, u8),
}

impl FrameState {
    /// Record one ball.
    ///
    /// `pins` must already have passed [`crate::validator::validate`] for
    /// this state; closed frames are returned unchanged.
    pub fn record(self, pins: u8, tenth: bool) -> Self {
        match self {
            FrameState::Empty if pins == MAX_PINS => FrameState::Strike,
            FrameState::Empty => FrameState::OneShot(pins),
            FrameState::OneShot(first) if first + pins == MAX_PINS => FrameState::Spare(first),
            FrameState::OneShot(first) => FrameState::Open(first, pins),
            FrameState::Spare(first) if tenth => FrameState::SpareBonus(first, pins),
            FrameState::Strike if tenth => FrameState::StrikeOneBonus(pins),
            FrameState::StrikeOneBonus(fill) if tenth => FrameState::StrikeTwoBonus(fill, pins),
            closed => closed,
        }
    }

    /// Whether the frame takes no more shots.
    pub fn is_closed(self, tenth: bool) -> bool {
        match self {
            FrameState::Empty | FrameState::OneShot(_) => false,
            FrameState::Open(..) => true,
            FrameState::Spare(_) | FrameState::Strike => !tenth,
            FrameState::StrikeOneBonus(_) => false,
            FrameState::SpareBonus(..) | FrameState::StrikeTwoBonus(..) => true,
        }
    }

    pub fn is_strike(self) -> bool {
        matches!(
            self,
            FrameState::Strike | FrameState::StrikeOneBonus(_) | FrameState::StrikeTwoBonus(..)
        )
    }

    pub fn is_spare(self) -> bool {
        matches!(self, FrameState::Spare(_) | FrameState::SpareBonus(..))
    }

    /// Pin counts in the order they were thrown.
    pub fn shots(self) -> ArrayVec<u8, MAX_SHOTS_PER_FRAME> {
        let mut out = ArrayVec::new();
        match self {
            FrameState::Empty => {}
            FrameState::OneShot(first) => out.push(first),
            FrameState::Open(first, second) => {
                out.push(first);
                out.push(second);
            }
            FrameState::Spare(first) => {
                out.push(first);
                out.push(MAX_PINS - first);
            }
            FrameState::Strike => out.push(MAX_PINS),
            FrameState::SpareBonus(first, fill) => {
                out.push(first);
                out.push(MAX_PINS - first);
                out.push(fill);
            }
            FrameState::StrikeOneBonus(fill) => {
                out.push(MAX_PINS);
                out.push(fill);
            }
            FrameState::StrikeTwoBonus(fill1, fill2) => {
                out.push(MAX_PINS);
                out.push(fill1);
                out.push(fill2);
            }
        }
        out
    }

    pub fn shot_count(self) -> usize {
        self.shots().len()
    }
}

/// One frame of the score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    pub(crate) state: FrameState,
    /// Future balls still to be credited to this frame (2 after a strike,
    /// 1 after a spare). For the tenth frame: fill balls still to come.
    pub(crate) bonus_owed: u8,
    /// Own pins plus credited bonus pins.
    pub(crate) score: u16,
    /// Running game total shown under this frame, once it is closed.
    pub(crate) display_total: Option<u16>,
}

impl Frame {
    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn bonus_owed(&self) -> u8 {
        self.bonus_owed
    }

    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn display_total(&self) -> Option<u16> {
        self.display_total
    }

    pub fn shots(&self) -> ArrayVec<u8, MAX_SHOTS_PER_FRAME> {
        self.state.shots()
    }
}
