use crate::core::parse::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("{command}: argument required")]
    MissingArgument { command: &'static str },

    #[error("{command}: argument must be a valid {expected}: {source}")]
    InvalidArgument {
        command: &'static str,
        expected: &'static str,
        #[source]
        source: ParseError,
    },

    #[error("invalid command: {token}")]
    InvalidCommand { token: String },

    #[error("invalid options: {detail}")]
    InvalidOptions { detail: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AlertError {
    /// Whether the usage text should precede the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            AlertError::MissingArgument { .. }
                | AlertError::InvalidCommand { .. }
                | AlertError::InvalidOptions { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

// Keeps only clap's headline so the message fits on one `<prog>: ...` line.
#[cfg(feature = "cli")]
impl From<clap::Error> for AlertError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let headline = rendered.lines().next().unwrap_or_default();
        AlertError::InvalidOptions {
            detail: headline.trim_start_matches("error: ").to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AlertError>;
