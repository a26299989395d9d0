use crate::config::CountdownConfig;
use crate::domain::model::AbortReason;
use crate::domain::ports::CountdownDisplay;
use crate::utils::error::Result;
use crate::utils::format::{format_remaining, format_timestamp};
use chrono::{DateTime, Local, TimeDelta};
use std::io::{self, Stderr, Stdout, Write};

const BELL: char = '\u{7}';

/// Renders the countdown as a single line that is redrawn in place.
#[derive(Debug)]
pub struct TerminalDisplay<W, E> {
    out: W,
    err: E,
    clear_width: usize,
}

impl TerminalDisplay<Stdout, Stderr> {
    pub fn stdio(config: &CountdownConfig) -> Self {
        Self::new(io::stdout(), io::stderr(), config.clear_width)
    }
}

impl<W: Write, E: Write> TerminalDisplay<W, E> {
    pub fn new(out: W, err: E, clear_width: usize) -> Self {
        Self {
            out,
            err,
            clear_width,
        }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    // Blank the whole line: a shorter duration would otherwise leave stale columns.
    fn clear_line(&mut self) -> io::Result<()> {
        write!(self.out, "\r{:width$}\r", "", width = self.clear_width)
    }
}

impl<W: Write + Send, E: Write + Send> CountdownDisplay for TerminalDisplay<W, E> {
    fn announce(&mut self, at: DateTime<Local>, remaining: TimeDelta) -> Result<()> {
        writeln!(self.out, "Alerting at {}", format_timestamp(&at))?;
        write!(self.out, "{}", format_remaining(remaining))?;
        self.out.flush()?;
        Ok(())
    }

    fn refresh(&mut self, remaining: TimeDelta) -> Result<()> {
        self.clear_line()?;
        write!(self.out, "{}", format_remaining(remaining))?;
        self.out.flush()?;
        Ok(())
    }

    fn fired(&mut self) -> Result<()> {
        self.clear_line()?;
        writeln!(self.out, "Timer elapsed{}", BELL)?;
        self.out.flush()?;
        Ok(())
    }

    fn aborted(&mut self, _reason: AbortReason) -> Result<()> {
        writeln!(self.err, "\nAborted.")?;
        self.err.flush()?;
        Ok(())
    }
}
