//! Line-oriented result printing

use std::io::{self, Write};

use crate::models::QueryOutcome;
use crate::output::formatters::{format_json, JsonFormatterOptions};

/// Writes per-query progress and results to an output stream.
pub struct Reporter<W: Write> {
    out: W,
    json: JsonFormatterOptions,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, json: JsonFormatterOptions) -> Self {
        Self { out, json }
    }

    /// Header line printed before each request, preceded by a blank line
    pub fn querying(&mut self, query: &str) -> io::Result<()> {
        writeln!(self.out, "\nQuerying for: {}", query)?;
        self.out.flush()
    }

    pub fn outcome(&mut self, outcome: &QueryOutcome) -> io::Result<()> {
        match outcome {
            QueryOutcome::Found(value) => match format_json(value, &self.json) {
                Ok(pretty) => writeln!(self.out, "{}", pretty)?,
                Err(e) => writeln!(self.out, "An error occurred: {}", e)?,
            },
            QueryOutcome::HttpError { status, reason } => {
                writeln!(self.out, "Error: {} - {}", status, reason)?
            }
            QueryOutcome::Transport(message) => {
                writeln!(self.out, "An error occurred: {}", message)?
            }
        }
        self.out.flush()
    }

    /// A standalone message line (validation and file errors)
    pub fn message(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
