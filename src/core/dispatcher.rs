use crate::core::parse::{parse_duration, parse_local_time, ParseError};
use crate::domain::model::Deadline;
use crate::utils::error::{AlertError, Result};
use chrono::{DateTime, Local, TimeDelta};
use std::ffi::OsStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `help`, `-h` or `--help`.
    Help,
    /// No arguments at all.
    Empty,
    In(TimeDelta),
    At(DateTime<Local>),
}

impl Command {
    /// Tokens are taken as raw OS strings; non-UTF-8 input is reported as a command error.
    pub fn parse<S: AsRef<OsStr>>(args: &[S]) -> Result<Self> {
        let first: &OsStr = match args.first() {
            Some(arg) => arg.as_ref(),
            None => return Ok(Command::Empty),
        };
        let Some(first) = first.to_str() else {
            return Err(AlertError::InvalidCommand {
                token: first.to_string_lossy().into_owned(),
            });
        };

        match first {
            "-h" | "--help" | "help" => Ok(Command::Help),
            "in" => {
                let value = required_argument("in", "duration", args)?;
                parse_duration(value)
                    .map(Command::In)
                    .map_err(|source| AlertError::InvalidArgument {
                        command: "in",
                        expected: "duration",
                        source,
                    })
            }
            "at" => {
                let value = required_argument("at", "time", args)?;
                parse_local_time(value)
                    .map(Command::At)
                    .map_err(|source| AlertError::InvalidArgument {
                        command: "at",
                        expected: "time",
                        source,
                    })
            }
            token => Err(AlertError::InvalidCommand {
                token: token.to_string(),
            }),
        }
    }

    /// Resolves the deadline relative to `now`; `None` for commands that start no alarm.
    pub fn deadline(&self, now: DateTime<Local>) -> Result<Option<Deadline>> {
        match self {
            Command::Help | Command::Empty => Ok(None),
            Command::In(delta) => {
                let at = now
                    .checked_add_signed(*delta)
                    .ok_or_else(|| AlertError::InvalidArgument {
                        command: "in",
                        expected: "duration",
                        source: ParseError::DurationOutOfRange {
                            input: delta.to_string(),
                        },
                    })?;
                Ok(Some(Deadline::new(at)))
            }
            Command::At(at) => Ok(Some(Deadline::new(*at))),
        }
    }
}

fn required_argument<'a, S: AsRef<OsStr>>(
    command: &'static str,
    expected: &'static str,
    args: &'a [S],
) -> Result<&'a str> {
    let value: &OsStr = args
        .get(1)
        .ok_or(AlertError::MissingArgument { command })?
        .as_ref();

    value.to_str().ok_or_else(|| AlertError::InvalidArgument {
        command,
        expected,
        source: ParseError::NotUnicode {
            input: value.to_string_lossy().into_owned(),
        },
    })
}
