use crate::config::CountdownConfig;
use crate::domain::model::{AlertOutcome, Deadline};
use crate::domain::ports::{AbortSource, CountdownDisplay};
use crate::utils::error::Result;
use crate::utils::format::{format_remaining, format_timestamp};
use chrono::{Local, TimeDelta};
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

// Stand-in for deadlines beyond what the monotonic clock can represent.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Blocks until a deadline passes or an abort arrives, refreshing the display meanwhile.
pub struct Countdown<D, A> {
    display: D,
    abort: A,
    config: CountdownConfig,
}

impl<D: CountdownDisplay, A: AbortSource> Countdown<D, A> {
    pub fn new(display: D, abort: A, config: CountdownConfig) -> Self {
        Self {
            display,
            abort,
            config,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Runs one alarm to completion.
    ///
    /// The wall-clock deadline is converted to the monotonic clock once, at
    /// start. Expiry wins over abort, and both win over a display refresh
    /// that is ready at the same time.
    pub async fn run(&mut self, deadline: Deadline) -> Result<AlertOutcome> {
        let initial = deadline.remaining_from(Local::now());
        let start = Instant::now();
        let fire_at = match initial.to_std() {
            Ok(wait) => start
                .checked_add(wait)
                .unwrap_or_else(|| start + FAR_FUTURE),
            Err(_) => start,
        };

        tracing::debug!(
            deadline = %format_timestamp(&deadline.at()),
            remaining = %format_remaining(initial),
            "countdown started"
        );
        self.display.announce(deadline.at(), initial)?;

        let expiry = time::sleep_until(fire_at);
        tokio::pin!(expiry);

        let period = self.config.tick_interval;
        let mut ticker = time::interval_at(start + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                () = &mut expiry => {
                    tracing::info!("deadline reached");
                    self.display.fired()?;
                    return Ok(AlertOutcome::Fired);
                }
                reason = self.abort.aborted() => {
                    tracing::info!(%reason, "countdown aborted");
                    self.display.aborted(reason)?;
                    return Ok(AlertOutcome::Aborted);
                }
                _ = ticker.tick() => {
                    let remaining = fire_at.saturating_duration_since(Instant::now());
                    let remaining = TimeDelta::from_std(remaining).unwrap_or_else(|_| TimeDelta::zero());
                    tracing::trace!(remaining = %format_remaining(remaining), "tick");
                    self.display.refresh(remaining)?;
                }
            }
        }
    }
}
