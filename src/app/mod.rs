use crate::adapters::{SignalAbort, TerminalDisplay};
use crate::config::{usage, CountdownConfig};
use crate::core::countdown::Countdown;
use crate::core::dispatcher::Command;
use crate::domain::model::AlertOutcome;
use crate::utils::error::Result;
use chrono::Local;
use std::ffi::OsStr;
use std::io::{self, Write};

/// Dispatches one invocation. `None` means no alarm was started.
pub async fn run<S: AsRef<OsStr>>(program: &str, args: &[S]) -> Result<Option<AlertOutcome>> {
    let command = Command::parse(args)?;
    tracing::debug!(?command, "dispatching");

    let Some(deadline) = command.deadline(Local::now())? else {
        match command {
            Command::Help => io::stdout().write_all(usage(program).as_bytes())?,
            _ => io::stderr().write_all(usage(program).as_bytes())?,
        }
        return Ok(None);
    };

    let config = CountdownConfig::default();
    let abort = SignalAbort::install()?;
    let mut countdown = Countdown::new(TerminalDisplay::stdio(&config), abort, config);
    let outcome = countdown.run(deadline).await?;
    Ok(Some(outcome))
}
