use crate::domain::model::AbortReason;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta};

/// Where the countdown is rendered.
pub trait CountdownDisplay: Send {
    fn announce(&mut self, at: DateTime<Local>, remaining: TimeDelta) -> Result<()>;
    fn refresh(&mut self, remaining: TimeDelta) -> Result<()>;
    fn fired(&mut self) -> Result<()>;
    fn aborted(&mut self, reason: AbortReason) -> Result<()>;
}

/// Resolves once an abort has been requested. Must be cancel safe.
#[async_trait]
pub trait AbortSource: Send {
    async fn aborted(&mut self) -> AbortReason;
}
