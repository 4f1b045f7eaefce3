//! ScoreboardPrinter: writes the scoreboard to a terminal.
//!
//! Lines are encoded into a byte buffer with crossterm commands first and
//! flushed in one write, so a half-drawn board never reaches the terminal.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::scoreboard::{border_line, pins_line, score_line, status_line};
use crate::types::{SPARE_MARK, STRIKE_MARK};

pub struct ScoreboardPrinter {
    color: bool,
    buf: Vec<u8>,
}

impl ScoreboardPrinter {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            buf: Vec::with_capacity(1024),
        }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Encode and write the board, then flush `out`.
    pub fn print<W: Write>(&mut self, snap: &GameSnapshot, out: &mut W) -> Result<()> {
        self.buf.clear();
        encode_scoreboard_into(snap, self.color, &mut self.buf)?;
        out.write_all(&self.buf)?;
        out.flush()?;
        Ok(())
    }
}

/// Encode border, pins line, score line, border and status into `out`.
///
/// With `color` off the output is plain text, byte-for-byte the rendered lines.
pub fn encode_scoreboard_into(snap: &GameSnapshot, color: bool, out: &mut Vec<u8>) -> Result<()> {
    let border = border_line();
    out.queue(Print(&border))?;
    out.queue(Print("\n"))?;
    encode_marked_line_into(&pins_line(snap), color, out)?;
    out.queue(Print(score_line(snap)))?;
    out.queue(Print("\n"))?;
    out.queue(Print(&border))?;
    out.queue(Print("\n"))?;

    if color && snap.is_over {
        out.queue(SetAttribute(Attribute::Bold))?;
        out.queue(Print(status_line(snap)))?;
        out.queue(SetAttribute(Attribute::Reset))?;
    } else {
        out.queue(Print(status_line(snap)))?;
    }
    out.queue(Print("\n"))?;
    Ok(())
}

fn mark_color(ch: char) -> Option<Color> {
    match ch {
        STRIKE_MARK => Some(Color::Red),
        SPARE_MARK => Some(Color::Yellow),
        _ => None,
    }
}

fn encode_marked_line_into(line: &str, color: bool, out: &mut Vec<u8>) -> Result<()> {
    if !color {
        out.queue(Print(line))?;
        out.queue(Print("\n"))?;
        return Ok(());
    }

    let mut plain = String::with_capacity(line.len());
    for ch in line.chars() {
        match mark_color(ch) {
            Some(c) => {
                if !plain.is_empty() {
                    out.queue(Print(&plain))?;
                    plain.clear();
                }
                out.queue(SetForegroundColor(c))?;
                out.queue(SetAttribute(Attribute::Bold))?;
                out.queue(Print(ch))?;
                out.queue(SetAttribute(Attribute::Reset))?;
                out.queue(ResetColor)?;
            }
            None => plain.push(ch),
        }
    }
    out.queue(Print(&plain))?;
    out.queue(Print("\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;

    #[test]
    fn plain_output_is_the_rendered_lines() {
        let mut game = Game::new();
        for pins in [10, 6, 4, 3] {
            game.add_shot(pins).unwrap();
        }
        let snap = game.snapshot();
        let mut out = Vec::new();
        encode_scoreboard_into(&snap, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = format!(
            "{b}\n{}\n{}\n{b}\nFrame 3 - running total 36\n",
            pins_line(&snap),
            score_line(&snap),
            b = border_line()
        );
        assert_eq!(text, expected);
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn color_output_highlights_marks() {
        let mut game = Game::new();
        game.add_shot(10).unwrap();
        let mut out = Vec::new();
        encode_scoreboard_into(&game.snapshot(), true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains('X'));
    }

    #[test]
    fn printer_writes_and_reuses_its_buffer() {
        let mut printer = ScoreboardPrinter::new(false);
        let snap = Game::new().snapshot();
        let mut first = Vec::new();
        let mut second = Vec::new();
        printer.print(&snap, &mut first).unwrap();
        printer.print(&snap, &mut second).unwrap();
        assert_eq!(first, second);
        assert!(!printer.color());
    }
}
