pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{SignalAbort, TerminalDisplay};
pub use config::CountdownConfig;
pub use self::core::{countdown::Countdown, dispatcher::Command};
pub use domain::model::{AbortReason, AlertOutcome, Deadline};
pub use domain::ports::{AbortSource, CountdownDisplay};
pub use utils::error::{AlertError, Result};
