//! Shot validation - legality of a single ball before it is recorded
//!
//! Validation is a pure verdict: it never touches the game, so a rejected
//! ball leaves totals, pending bonuses and frame contents exactly as they were.

use crate::error::ShotError;
use crate::frame::FrameState;
use crate::types::{LAST_FRAME, MAX_PINS};

/// Most pins the next ball into a frame may knock down, or `None` if the
/// frame takes no more balls.
///
/// A fresh rack allows 10. The second ball of a rack is capped by what the
/// first left standing. In the tenth frame, a strike racks up fresh pins for
/// the first fill ball; the second fill ball is capped by the first unless
/// the first was itself a strike. A spare's single fill ball is always a
/// fresh rack.
pub fn slot_limit(frame_index: usize, state: FrameState) -> Option<u8> {
    let tenth = frame_index == LAST_FRAME;
    match state {
        FrameState::Empty => Some(MAX_PINS),
        FrameState::OneShot(first) => Some(MAX_PINS - first),
        FrameState::Strike | FrameState::Spare(_) if tenth => Some(MAX_PINS),
        FrameState::StrikeOneBonus(fill) if tenth => {
            if fill == MAX_PINS {
                Some(MAX_PINS)
            } else {
                Some(MAX_PINS - fill)
            }
        }
        _ => None,
    }
}

/// Check a raw pin count against a slot's limit.
pub fn check_shot(pins: i32, limit: u8) -> Result<u8, ShotError> {
    match u8::try_from(pins) {
        Ok(p) if p <= limit && p <= MAX_PINS => Ok(p),
        _ => Err(ShotError::InvalidPinCount { pins, max: limit }),
    }
}

/// Validate the next ball for a frame.
pub fn validate(pins: i32, frame_index: usize, state: FrameState) -> Result<u8, ShotError> {
    let limit = slot_limit(frame_index, state).ok_or(ShotError::GameAlreadyOver)?;
    check_shot(pins, limit)
}
