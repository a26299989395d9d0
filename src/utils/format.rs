use chrono::{DateTime, Local, TimeDelta};
use std::time::Duration;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Rounds to whole seconds, half away from zero.
pub fn round_to_seconds(delta: TimeDelta) -> i64 {
    let millis = delta.num_milliseconds();
    (millis + millis.signum() * 500) / 1000
}

pub fn format_remaining(delta: TimeDelta) -> String {
    let seconds = round_to_seconds(delta);
    let rendered = humantime::format_duration(Duration::from_secs(seconds.unsigned_abs()));
    if seconds < 0 {
        format!("-{}", rendered)
    } else {
        rendered.to_string()
    }
}

pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_seconds() {
        assert_eq!(round_to_seconds(TimeDelta::milliseconds(1499)), 1);
        assert_eq!(round_to_seconds(TimeDelta::milliseconds(1500)), 2);
        assert_eq!(round_to_seconds(TimeDelta::milliseconds(-1500)), -2);
        assert_eq!(round_to_seconds(TimeDelta::milliseconds(-400)), 0);
        assert_eq!(round_to_seconds(TimeDelta::zero()), 0);
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(TimeDelta::seconds(0)), "0s");
        assert_eq!(format_remaining(TimeDelta::milliseconds(9_600)), "10s");
        assert_eq!(format_remaining(TimeDelta::seconds(90)), "1m 30s");
        assert_eq!(format_remaining(TimeDelta::seconds(5_400)), "1h 30m");
        assert_eq!(format_remaining(TimeDelta::seconds(-5)), "-5s");
    }
}
