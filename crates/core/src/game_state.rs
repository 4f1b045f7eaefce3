//! Game state module - the frame cursor and the shot-by-shot state machine
//!
//! [`Game`] owns the ten frames, the running total and the cursor. Every ball
//! goes through [`Game::add_shot`]: validate against the current frame, commit
//! the pins (see [`crate::scoring`]), refresh the display totals, then move
//! the cursor if the frame closed. The game ends when the tenth frame closes,
//! which happens after two balls (open), after a spare and its fill ball, or
//! after a strike and both fill balls.

use arrayvec::ArrayVec;
use log::{debug, info, warn};

use crate::error::ShotError;
use crate::frame::Frame;
use crate::scoring::{self, ShotMark};
use crate::snapshot::GameSnapshot;
use crate::types::{FRAME_COUNT, LAST_FRAME, MAX_SHOTS_PER_FRAME};
use crate::validator;

/// Which frame takes the next ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// Fresh or reset game; the first ball goes into frame 0.
    #[default]
    NotStarted,
    Frame(usize),
    /// All ten frames closed.
    Finished,
}

impl Cursor {
    /// Numeric form: -1 before the first ball, 0-9 while playing, 10 when done.
    pub fn index(self) -> i8 {
        match self {
            Cursor::NotStarted => -1,
            Cursor::Frame(i) => i as i8,
            Cursor::Finished => FRAME_COUNT as i8,
        }
    }
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    frames: [Frame; FRAME_COUNT],
    cursor: Cursor,
    total_score: u16,
    over: bool,
}

impl Game {
    /// Create a new game. Nothing is thrown until the first [`Game::add_shot`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the cursor at the first frame.
    ///
    /// Optional: the first ball starts the game on its own.
    pub fn start(&mut self) {
        if self.cursor == Cursor::NotStarted {
            self.cursor = Cursor::Frame(0);
        }
    }

    pub fn started(&self) -> bool {
        self.cursor != Cursor::NotStarted
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn total_score(&self) -> u16 {
        self.total_score
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn cursor_index(&self) -> i8 {
        self.cursor.index()
    }

    /// Frame taking the next ball, if any.
    pub fn current_frame(&self) -> Option<usize> {
        match self.cursor {
            Cursor::NotStarted => Some(0),
            Cursor::Frame(i) => Some(i),
            Cursor::Finished => None,
        }
    }

    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Each frame's own contribution (pins plus credited bonuses).
    pub fn frame_scores(&self) -> [u16; FRAME_COUNT] {
        std::array::from_fn(|i| self.frames[i].score)
    }

    /// Bonus balls each frame is still waiting for.
    pub fn bonus_owed(&self) -> [u8; FRAME_COUNT] {
        std::array::from_fn(|i| self.frames[i].bonus_owed)
    }

    pub fn shots_in_frame(&self, index: usize) -> ArrayVec<u8, MAX_SHOTS_PER_FRAME> {
        self.frames
            .get(index)
            .map(Frame::shots)
            .unwrap_or_default()
    }

    /// Throw one ball.
    ///
    /// On error nothing changes: the ball is validated in full before any
    /// field is touched.
    pub fn add_shot(&mut self, pins: i32) -> Result<ShotMark, ShotError> {
        if self.over {
            warn!("ball of {} pins rejected: game is over", pins);
            return Err(ShotError::GameAlreadyOver);
        }
        let Some(index) = self.current_frame() else {
            return Err(ShotError::GameAlreadyOver);
        };

        let pins = validator::validate(pins, index, self.frames[index].state).inspect_err(|e| {
            warn!("frame {}: {}", index + 1, e);
        })?;

        self.cursor = Cursor::Frame(index);
        let mark = scoring::commit(&mut self.frames, &mut self.total_score, index, pins);
        scoring::refresh_totals(&mut self.frames);
        debug!(
            "frame {}: {} pins ({:?}), total {}",
            index + 1,
            pins,
            mark,
            self.total_score
        );

        if self.frames[index].state.is_closed(index == LAST_FRAME) {
            self.close_frame(index);
        }
        Ok(mark)
    }

    fn close_frame(&mut self, index: usize) {
        if index < LAST_FRAME {
            self.cursor = Cursor::Frame(index + 1);
            debug!("frame {} closed, running total {}", index + 1, self.total_score);
        } else {
            self.cursor = Cursor::Finished;
            self.over = true;
            info!("game over, final score {}", self.total_score);
        }
    }

    /// Clear every frame and return to the state of [`Game::new`].
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    /// Read-only copy of the score sheet.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot in place.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (slot, frame) in out.frames.iter_mut().zip(self.frames.iter()) {
            slot.fill_from(frame);
        }
        out.cursor = self.cursor.index();
        out.total_score = self.total_score;
        out.is_over = self.over;
    }
}
