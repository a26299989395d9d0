use chrono::{DateTime, Local, TimeDelta};
use std::fmt;

/// The absolute point in time at which the alert fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(DateTime<Local>);

impl Deadline {
    pub fn new(at: DateTime<Local>) -> Self {
        Self(at)
    }

    pub fn at(&self) -> DateTime<Local> {
        self.0
    }

    /// Negative once the deadline has passed.
    pub fn remaining_from(&self, now: DateTime<Local>) -> TimeDelta {
        self.0 - now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    Fired,
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    Interrupt,
    Hangup,
    Abort,
    Terminate,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AbortReason::Interrupt => "interrupt",
            AbortReason::Hangup => "hangup",
            AbortReason::Abort => "abort",
            AbortReason::Terminate => "terminate",
        };
        f.write_str(name)
    }
}
