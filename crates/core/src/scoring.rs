//! Scoring module - committing balls and crediting strike/spare bonuses
//!
//! Standard ten-pin rules:
//! - An open frame scores its own pins.
//! - A spare scores 10 plus the next ball.
//! - A strike scores 10 plus the next two balls, which may come from the
//!   next two frames.
//! - Tenth-frame fill balls count toward the tenth frame only.
//!
//! Bonuses are credited as the later balls land. Each frame keeps a count of
//! balls it is still owed; [`bonus_credits`] decides which earlier frames a
//! ball pays into, `commit` applies it. Cursor movement and game-over
//! detection live in [`crate::game_state`].

use arrayvec::ArrayVec;
use log::trace;

use crate::frame::{Frame, FrameState};
use crate::types::{FRAME_COUNT, LAST_FRAME, MAX_PINS};
use crate::validator::slot_limit;

/// How a ball reads on the score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotMark {
    Strike,
    Spare,
    Pins(u8),
}

/// Frames that a ball in `acting` pays a bonus into, nearest first.
///
/// - One back: the previous frame, if it still owes balls.
/// - Two back: only on the first ball of a frame, when the previous frame is
///   a strike and the one before it is still owed its second bonus ball
///   (back-to-back strikes).
///
/// `owed` must hold the counts as they were before this ball.
pub fn bonus_credits(
    owed: &[u8; FRAME_COUNT],
    acting: usize,
    first_shot: bool,
    prev_was_strike: bool,
) -> ArrayVec<usize, 2> {
    let mut credits = ArrayVec::new();
    if acting >= 1 && owed[acting - 1] > 0 {
        credits.push(acting - 1);
    }
    if first_shot && prev_was_strike && acting >= 2 && owed[acting - 2] > 0 {
        credits.push(acting - 2);
    }
    credits
}

/// Mark for a ball of `pins` thrown into a frame in state `before`.
pub fn shot_mark(before: FrameState, pins: u8) -> ShotMark {
    let fresh_rack = matches!(
        before,
        FrameState::Empty | FrameState::Strike | FrameState::Spare(_) | FrameState::StrikeOneBonus(MAX_PINS)
    );
    match before {
        _ if fresh_rack && pins == MAX_PINS => ShotMark::Strike,
        FrameState::OneShot(first) if first + pins == MAX_PINS => ShotMark::Spare,
        FrameState::StrikeOneBonus(fill) if fill != MAX_PINS && fill + pins == MAX_PINS => {
            ShotMark::Spare
        }
        _ => ShotMark::Pins(pins),
    }
}

fn owed_counts(frames: &[Frame; FRAME_COUNT]) -> [u8; FRAME_COUNT] {
    std::array::from_fn(|i| frames[i].bonus_owed)
}

/// Record an already validated ball into frame `index`.
///
/// Adds the pins to the frame and the running total, credits any frames
/// still owed bonus balls, and updates the acting frame's own bonus count.
/// The frame must still take a ball; [`Game::add_shot`] checks that first.
///
/// [`Game::add_shot`]: crate::Game::add_shot
pub(crate) fn commit(
    frames: &mut [Frame; FRAME_COUNT],
    total: &mut u16,
    index: usize,
    pins: u8,
) -> ShotMark {
    let tenth = index == LAST_FRAME;
    let before = frames[index].state;
    debug_assert!(
        slot_limit(index, before).is_some_and(|limit| pins <= limit),
        "ball of {pins} committed to frame {index} in state {before:?}"
    );
    let first_shot = before == FrameState::Empty;
    let prev_was_strike = index > 0 && frames[index - 1].state == FrameState::Strike;
    let credits = bonus_credits(&owed_counts(frames), index, first_shot, prev_was_strike);

    *total += u16::from(pins);
    let frame = &mut frames[index];
    frame.state = before.record(pins, tenth);
    frame.score += u16::from(pins);

    let fill_ball = tenth
        && matches!(
            before,
            FrameState::Strike | FrameState::Spare(_) | FrameState::StrikeOneBonus(_)
        );
    if fill_ball {
        frame.bonus_owed = frame.bonus_owed.saturating_sub(1);
    } else {
        match frame.state {
            FrameState::Strike => frame.bonus_owed = 2,
            FrameState::Spare(_) => frame.bonus_owed = 1,
            _ => {}
        }
    }

    for credited in credits {
        let owed = &mut frames[credited];
        owed.score += u16::from(pins);
        owed.bonus_owed -= 1;
        *total += u16::from(pins);
        trace!(
            "frame {} credited {} bonus pins ({} still owed)",
            credited + 1,
            pins,
            owed.bonus_owed
        );
    }

    shot_mark(before, pins)
}

/// Refresh the running totals shown under each closed frame.
pub fn refresh_totals(frames: &mut [Frame; FRAME_COUNT]) {
    let mut running: u16 = 0;
    for (index, frame) in frames.iter_mut().enumerate() {
        running += frame.score;
        frame.display_total = frame
            .state
            .is_closed(index == LAST_FRAME)
            .then_some(running);
    }
}
