//! Scoreboard rendering: fixed-width text cells per frame.
//!
//! Every function here is a pure function of a snapshot. A frame renders as
//! one cell starting with `|`; cells are concatenated in frame order and the
//! line is closed with a final `|`.
//!
//! Marker rules walk the balls of a frame while tracking whether the rack is
//! fresh. A ten on a fresh rack is `X`. A ball that clears the pins left
//! standing is `/`. Anything else is its digit. This one rule covers regular
//! frames and every fill-ball combination of the tenth frame.

use arrayvec::ArrayVec;

use crate::core::{FrameSnapshot, Game, GameSnapshot};
use crate::types::{
    BORDER_MARK, FRAME_CELL_WIDTH, FRAME_SEPARATOR, LAST_FRAME, MAX_PINS, MAX_SHOTS_PER_FRAME,
    SCOREBOARD_WIDTH, SPARE_MARK, STRIKE_MARK, TENTH_CELL_WIDTH,
};

/// Display characters for a frame's balls, in throw order.
pub fn marks(shots: &[u8]) -> ArrayVec<char, MAX_SHOTS_PER_FRAME> {
    let mut out = ArrayVec::new();
    let mut fresh = true;
    let mut standing = MAX_PINS;
    for &pins in shots.iter().take(MAX_SHOTS_PER_FRAME) {
        let ch = if fresh && pins >= MAX_PINS {
            STRIKE_MARK
        } else if fresh {
            fresh = false;
            standing = MAX_PINS.saturating_sub(pins);
            digit(pins)
        } else {
            fresh = true;
            if pins >= standing {
                SPARE_MARK
            } else {
                digit(pins)
            }
        };
        out.push(ch);
    }
    out
}

fn digit(pins: u8) -> char {
    char::from_digit(u32::from(pins), 10).unwrap_or('?')
}

fn cell_width(index: usize) -> usize {
    if index == LAST_FRAME {
        TENTH_CELL_WIDTH
    } else {
        FRAME_CELL_WIDTH
    }
}

fn blank_cell(index: usize) -> String {
    format!("{FRAME_SEPARATOR}{:w$}", "", w = cell_width(index) - 1)
}

/// Pin cell for frame `index`: `|  X  `, `| 7 / `, `| 9 0 `, `| 4   `, or
/// for the tenth frame `| X 8 1 `, `| 5 / 6 `.
pub fn render_pins(index: usize, frame: &FrameSnapshot) -> String {
    if frame.is_empty() {
        return blank_cell(index);
    }
    let marks = marks(&frame.shots);
    let slot = |i: usize| marks.get(i).copied().unwrap_or(' ');

    if index == LAST_FRAME {
        format!("{FRAME_SEPARATOR} {} {} {} ", slot(0), slot(1), slot(2))
    } else if marks.as_slice() == [STRIKE_MARK] {
        format!("{FRAME_SEPARATOR}  {STRIKE_MARK}  ")
    } else {
        format!("{FRAME_SEPARATOR} {} {} ", slot(0), slot(1))
    }
}

/// Score cell for frame `index`: the running total, right-aligned, once the
/// frame is closed.
pub fn render_score(index: usize, frame: &FrameSnapshot) -> String {
    match frame.display_total {
        Some(total) => {
            let w = cell_width(index) - 3;
            format!("{FRAME_SEPARATOR} {total:>w$} ")
        }
        None => blank_cell(index),
    }
}

fn join_cells(snap: &GameSnapshot, cell: fn(usize, &FrameSnapshot) -> String) -> String {
    let mut line = String::with_capacity(SCOREBOARD_WIDTH);
    for (index, frame) in snap.frames.iter().enumerate() {
        line.push_str(&cell(index, frame));
    }
    line.push(FRAME_SEPARATOR);
    line
}

pub fn pins_line(snap: &GameSnapshot) -> String {
    join_cells(snap, render_pins)
}

pub fn score_line(snap: &GameSnapshot) -> String {
    join_cells(snap, render_score)
}

pub fn render_pins_line(game: &Game) -> String {
    pins_line(&game.snapshot())
}

pub fn render_score_line(game: &Game) -> String {
    score_line(&game.snapshot())
}

/// Horizontal rule as wide as a scoreboard line.
pub fn border_line() -> String {
    BORDER_MARK.to_string().repeat(SCOREBOARD_WIDTH)
}

/// One-line status under the board.
pub fn status_line(snap: &GameSnapshot) -> String {
    if snap.is_over {
        format!("Game over! Final score: {}", snap.total_score)
    } else if snap.cursor < 0 {
        "New game".to_string()
    } else {
        format!("Frame {} - running total {}", snap.cursor + 1, snap.total_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(shots: &[u8], total: Option<u16>) -> FrameSnapshot {
        FrameSnapshot {
            shots: shots.iter().copied().collect(),
            display_total: total,
            ..FrameSnapshot::default()
        }
    }

    #[test]
    fn marks_follow_the_rack() {
        assert_eq!(marks(&[10]).as_slice(), &['X']);
        assert_eq!(marks(&[7, 3]).as_slice(), &['7', '/']);
        assert_eq!(marks(&[0, 10]).as_slice(), &['0', '/']);
        assert_eq!(marks(&[9, 0]).as_slice(), &['9', '0']);
        assert_eq!(marks(&[10, 10, 10]).as_slice(), &['X', 'X', 'X']);
        assert_eq!(marks(&[10, 5, 5]).as_slice(), &['X', '5', '/']);
        assert_eq!(marks(&[10, 8, 1]).as_slice(), &['X', '8', '1']);
        assert_eq!(marks(&[5, 5, 10]).as_slice(), &['5', '/', 'X']);
        assert_eq!(marks(&[5, 5, 6]).as_slice(), &['5', '/', '6']);
        assert_eq!(marks(&[10, 0, 10]).as_slice(), &['X', '0', '/']);
        assert_eq!(marks(&[0, 10, 10]).as_slice(), &['0', '/', 'X']);
        assert_eq!(marks(&[0, 0]).as_slice(), &['0', '0']);
    }

    #[test]
    fn out_of_range_counts_still_render() {
        assert_eq!(marks(&[11, 3]).as_slice(), &['X', '3']);
        assert_eq!(marks(&[3, 12]).as_slice(), &['3', '/']);
        assert_eq!(render_pins(2, &frame(&[12], None)), "|  X  ");
        assert_eq!(render_pins(LAST_FRAME, &frame(&[4, 200, 9], None)).len(), TENTH_CELL_WIDTH);
    }

    #[test]
    fn regular_cells() {
        assert_eq!(render_pins(0, &frame(&[], None)), "|     ");
        assert_eq!(render_pins(0, &frame(&[10], None)), "|  X  ");
        assert_eq!(render_pins(3, &frame(&[4], None)), "| 4   ");
        assert_eq!(render_pins(3, &frame(&[6, 4], None)), "| 6 / ");
        assert_eq!(render_pins(3, &frame(&[5, 3], None)), "| 5 3 ");
    }

    #[test]
    fn tenth_cells_are_wider() {
        assert_eq!(render_pins(LAST_FRAME, &frame(&[], None)), "|       ");
        assert_eq!(render_pins(LAST_FRAME, &frame(&[10], None)), "| X     ");
        assert_eq!(render_pins(LAST_FRAME, &frame(&[10, 10], None)), "| X X   ");
        assert_eq!(render_pins(LAST_FRAME, &frame(&[10, 5, 5], None)), "| X 5 / ");
        assert_eq!(render_pins(LAST_FRAME, &frame(&[3, 4], None)), "| 3 4   ");
        let cases: [&[u8]; 3] = [&[], &[1], &[1, 9, 10]];
        for shots in cases {
            assert_eq!(render_pins(LAST_FRAME, &frame(shots, None)).len(), TENTH_CELL_WIDTH);
        }
    }

    #[test]
    fn score_cells() {
        assert_eq!(render_score(0, &frame(&[5, 3], Some(8))), "|   8 ");
        assert_eq!(render_score(7, &frame(&[10], Some(120))), "| 120 ");
        assert_eq!(render_score(4, &frame(&[5], None)), "|     ");
        assert_eq!(render_score(LAST_FRAME, &frame(&[10, 10, 10], Some(300))), "|   300 ");
        assert_eq!(render_score(LAST_FRAME, &frame(&[], None)), "|       ");
    }

    #[test]
    fn empty_board() {
        let snap = GameSnapshot::default();
        let blank = "|     ".repeat(9) + "|       |";
        assert_eq!(pins_line(&snap), blank);
        assert_eq!(score_line(&snap), blank);
        assert_eq!(border_line().len(), SCOREBOARD_WIDTH);
        assert_eq!(status_line(&snap), "New game");
    }

    #[test]
    fn status_tracks_the_cursor() {
        let snap = GameSnapshot {
            cursor: 3,
            total_score: 42,
            ..GameSnapshot::default()
        };
        assert_eq!(status_line(&snap), "Frame 4 - running total 42");
    }
}
