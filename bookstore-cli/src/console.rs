//! Line-oriented prompting over any reader/writer pair.

use std::fmt::Display;
use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `question` and return the answer without its line ending.
    pub(crate) fn prompt(&mut self, question: &str) -> Result<String, CliError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Ask until the answer parses as an integer.
    pub(crate) fn prompt_int(&mut self, question: &str) -> Result<i64, CliError> {
        loop {
            let answer = self.prompt(question)?;
            match answer.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.warn("Please enter an integer.")?,
            }
        }
    }

    pub(crate) fn say(&mut self, text: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Operator-facing complaint about their input.
    pub(crate) fn warn(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(
            self.output,
            "{}",
            text.if_supports_color(Stdout, |t| t.yellow())
        )?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}
