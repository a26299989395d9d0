use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset, by number of `-v` flags.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "alert=warn",
        1 => "alert=debug",
        _ => "alert=trace",
    }
}

/// Installs a stderr subscriber; stdout belongs to the countdown line.
pub fn init_cli_logger(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::registry().with(filter).with(layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_by_verbosity() {
        assert_eq!(default_directive(0), "alert=warn");
        assert_eq!(default_directive(1), "alert=debug");
        assert_eq!(default_directive(2), "alert=trace");
        assert_eq!(default_directive(u8::MAX), "alert=trace");
    }
}
