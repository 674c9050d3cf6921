//! Prompt-and-read helpers shared by every exercise
//!
//! A [`Prompter`] owns an input stream and an output stream. Each read prints
//! its prompt, flushes, and blocks until a value is available.
//!
//! # Input model
//!
//! Numbers are read the way `scanf("%d")` reads them: as whitespace-delimited
//! tokens that may span lines, so `5 3 -1` typed on one line satisfies three
//! [`Prompter::get_int`] calls. [`Prompter::get_line`] returns whatever is left
//! of the current line, or reads a new one when nothing is pending. Line
//! terminators are never part of a returned value.
//!
//! Malformed input is reported as [`PromptError::Parse`] rather than producing
//! a garbage value.

use crate::errors::PromptError;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    /// Unconsumed remainder of the most recently read line
    pending: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter {
            reader,
            writer,
            pending: String::new(),
        }
    }

    /// Output stream for results
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print `prompt` and read an integer
    pub fn get_int(&mut self, prompt: &str) -> Result<i64, PromptError> {
        self.show(prompt)?;
        let token = self.next_token()?;
        token.parse::<i64>().map_err(|_| PromptError::Parse {
            input: token,
            expected: "an integer",
        })
    }

    /// Print `prompt` and read a real number
    pub fn get_real(&mut self, prompt: &str) -> Result<f64, PromptError> {
        self.show(prompt)?;
        let token = self.next_token()?;
        token.parse::<f64>().map_err(|_| PromptError::Parse {
            input: token,
            expected: "a real number",
        })
    }

    /// Print `prompt` and read a line of text
    pub fn get_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.show(prompt)?;
        if self.pending.trim().is_empty() && !self.fill()? {
            return Err(PromptError::EndOfInput);
        }
        let line = self.pending.trim_start().to_string();
        self.pending.clear();
        debug!(len = line.len(), "read line");
        Ok(line)
    }

    fn show(&mut self, prompt: &str) -> Result<(), PromptError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Replace the pending buffer with the next input line.
    ///
    /// Returns `false` at end of input.
    fn fill(&mut self) -> Result<bool, PromptError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(false);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        trace!(line = %buf, "filled input buffer");
        self.pending = buf;
        Ok(true)
    }

    fn next_token(&mut self) -> Result<String, PromptError> {
        loop {
            let trimmed = self.pending.trim_start();
            if !trimmed.is_empty() {
                let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                let token = trimmed[..end].to_string();
                let rest = trimmed[end..].to_string();
                self.pending = rest;
                debug!(token = %token, "read token");
                return Ok(token);
            }
            if !self.fill()? {
                return Err(PromptError::EndOfInput);
            }
        }
    }
}
