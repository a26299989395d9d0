use crate::utils::format::TIMESTAMP_FORMAT;
use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid duration {input:?}: {source}")]
    InvalidDuration {
        input: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("duration {input:?} is out of range")]
    DurationOutOfRange { input: String },

    #[error("parsing time {input:?}: {source}")]
    InvalidTime {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("time {input:?} does not exist in the local time zone")]
    NonexistentTime { input: String },

    #[error("{input:?} is not valid unicode")]
    NotUnicode { input: String },
}

/// Parses compound unit syntax such as `90s`, `1h30m` or `-5m`.
///
/// A leading sign is accepted and a bare `0` needs no unit.
pub fn parse_duration(input: &str) -> Result<TimeDelta, ParseError> {
    let (negative, magnitude) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let duration = if magnitude == "0" {
        Duration::ZERO
    } else {
        humantime::parse_duration(magnitude).map_err(|source| ParseError::InvalidDuration {
            input: input.to_string(),
            source,
        })?
    };

    let delta = TimeDelta::from_std(duration).map_err(|_| ParseError::DurationOutOfRange {
        input: input.to_string(),
    })?;

    Ok(if negative { -delta } else { delta })
}

/// Parses `YYYY-MM-DDTHH:MM:SS` in the host's local time zone.
///
/// Ambiguous wall-clock times resolve to the earlier instant.
pub fn parse_local_time(input: &str) -> Result<DateTime<Local>, ParseError> {
    let naive = NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT).map_err(|source| {
        ParseError::InvalidTime {
            input: input.to_string(),
            source,
        }
    })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| ParseError::NonexistentTime {
            input: input.to_string(),
        })
}
