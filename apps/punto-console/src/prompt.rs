//! # Prompts
//!
//! Line-oriented reading of operator input, plus the error stream.
//!
//! Every prompt is written to the output stream and flushed before a line is
//! read, so the operator sees it even when stdout is block-buffered.
//! Numeric fields are re-prompted until they parse.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::error::{ConsoleError, ConsoleResult};

const CLEAR_SCREEN: &str = "\x1B[H\x1B[2J";

/// Operator decision at the end of each repeat loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Stop,
}

impl Continuation {
    /// Reads an answer: `affirmative` (case-insensitive) continues, anything
    /// else stops.
    pub fn from_answer(answer: &str, affirmative: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case(affirmative) {
            Continuation::Continue
        } else {
            Continuation::Stop
        }
    }

    pub fn should_continue(self) -> bool {
        self == Continuation::Continue
    }
}

/// Input, output and error streams of one session.
pub struct Prompter<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Prompter<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Prompter { input, out, err }
    }

    /// The output stream, for rendering tables and headings.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Writes `prompt` and reads one line, without its line terminator.
    ///
    /// ## Errors
    /// `EndOfInput` once stdin is closed.
    pub fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Reads free text such as a product name, trimmed.
    pub fn read_text(&mut self, prompt: &str) -> ConsoleResult<String> {
        Ok(self.read_line(prompt)?.trim().to_string())
    }

    /// Reads a single whitespace-free token such as a barcode.
    ///
    /// Blank lines are skipped; only the first word of a line is kept.
    pub fn read_token(&mut self, prompt: &str) -> ConsoleResult<String> {
        loop {
            let line = self.read_line(prompt)?;
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }

    /// Reads a value of type `T`, reporting and re-prompting until the
    /// operator enters something that parses.
    pub fn read_parsed<T: FromStr>(&mut self, prompt: &str, field: &str) -> ConsoleResult<T> {
        loop {
            let line = self.read_line(prompt)?;
            let input = line.trim();
            match input.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => self.report(&ConsoleError::parse(field, input))?,
            }
        }
    }

    /// Asks whether to repeat. A closed stdin counts as "stop".
    pub fn ask_continue(&mut self, prompt: &str, affirmative: &str) -> ConsoleResult<Continuation> {
        match self.read_line(prompt) {
            Ok(answer) => Ok(Continuation::from_answer(&answer, affirmative)),
            Err(ConsoleError::EndOfInput) => Ok(Continuation::Stop),
            Err(err) => Err(err),
        }
    }

    /// Writes a diagnostic line to the error stream.
    pub fn report(&mut self, error: &ConsoleError) -> ConsoleResult<()> {
        debug!(code = %error.code(), %error, "Reported to operator");
        writeln!(self.err, "error[{}]: {}", error.code(), error)?;
        Ok(())
    }

    /// Writes an informational line to the error stream.
    pub fn notice(&mut self, message: &str) -> ConsoleResult<()> {
        writeln!(self.err, "aviso: {}", message)?;
        Ok(())
    }

    pub fn clear_screen(&mut self) -> ConsoleResult<()> {
        write!(self.out, "{}", CLEAR_SCREEN)?;
        self.out.flush()?;
        Ok(())
    }
}
