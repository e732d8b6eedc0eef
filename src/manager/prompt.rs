//! Line-oriented terminal prompts
//!
//! Generic over the input and output streams so sessions can be driven from
//! in-memory buffers as well as the real terminal.

use std::fmt;
use std::io::{BufRead, Write};

use crate::error::{TrackerError, TrackerResult};

/// Reads answers from `input` after writing questions to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt for a line of input, returned trimmed
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// they reach the caller's own validation. End of input is reported as
    /// [`TrackerError::InputClosed`].
    pub fn prompt_string(&mut self, prompt: &str) -> TrackerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(TrackerError::InputClosed);
        }

        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Ask a yes/no question, re-asking until the answer is recognised
    pub fn confirm(&mut self, prompt: &str, default: bool) -> TrackerResult<bool> {
        loop {
            let answer = self.prompt_string(prompt)?.to_lowercase();
            match answer.as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer yes or no.")?,
            }
        }
    }

    /// Write one line of output
    pub fn say(&mut self, line: impl fmt::Display) -> TrackerResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Write a block of text as-is
    pub fn write_block(&mut self, text: &str) -> TrackerResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Give back the underlying streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
