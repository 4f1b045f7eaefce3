//! Prompt loop reading commands from a line-oriented stream.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;

use crate::map::parse_command;
use crate::types::GameCommand;

pub const PROMPT: &str = "Enter the number of pins: ";
pub const RETRY_MESSAGE: &str = "Invalid input. Please enter a valid pin count.";

/// Reads commands, re-prompting until one parses.
pub struct PinPrompt<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> PinPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Next valid command, or `None` once the input is exhausted.
    pub fn next_command(&mut self) -> Result<Option<GameCommand>> {
        loop {
            self.output.write_all(PROMPT.as_bytes())?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            if let Some(cmd) = parse_command(&self.line) {
                return Ok(Some(cmd));
            }
            debug!("unparseable input: {:?}", self.line.trim_end());
            writeln!(self.output, "{RETRY_MESSAGE}")?;
        }
    }

    /// Print a message on its own line.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
