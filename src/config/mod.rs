#[cfg(feature = "cli")]
use clap::{ArgAction, Parser};
#[cfg(feature = "cli")]
use std::ffi::OsString;
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "alert")]
#[command(about = "Alert when a duration has elapsed or a time has arrived")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    /// Raise log verbosity; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command and its argument, handed to the dispatcher untouched.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

/// Countdown rendering and refresh settings.
#[derive(Debug, Clone)]
pub struct CountdownConfig {
    pub tick_interval: Duration,
    /// Columns blanked before each redraw; must exceed any rendered remaining time.
    pub clear_width: usize,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            clear_width: 60,
        }
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "usage: {} <cmd> [args...]\n\
         \n\
         commands:\n\
         \thelp              Print this message\n\
         \tin    <duration>  Alert when the given duration has elapsed\n\
         \tat    <time>      Alert at the given time\n",
        program
    )
}
