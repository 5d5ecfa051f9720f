//! Structured logging for koine
//!
//! This module provides structured logging using the `tracing` crate.
//! The library itself only emits events (load progress, dropped index
//! entries); embedding applications call [`init_logging`] once at startup
//! to get them on stderr.

use crate::config::EnvConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// This should be called once at program startup. The log level can be
/// controlled via the `KOINE_LOG_LEVEL` environment variable, with
/// `RUST_LOG` honored as a fallback.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let config = EnvConfig::from_env();

    let filter = match config.log_level.as_str() {
        "trace" => EnvFilter::new("trace"),
        "debug" => EnvFilter::new("debug"),
        "info" => EnvFilter::new("info"),
        "warn" => EnvFilter::new("warn"),
        "error" => EnvFilter::new("error"),
        _ => EnvFilter::new("info"),
    };

    let filter = filter.add_directive(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string())
            .parse()?,
    );

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(config.debug_mode)
        .with_line_number(config.debug_mode);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging for tests
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

// Re-export commonly used tracing macros
pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{debug_span, error_span, info_span, trace_span, warn_span};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_setup() {
        init_test_logging();

        info!("dictionary load starting");
        debug!(keywords = 42, "index build step");
        warn!(uid = 123, "dropping unresolved index entry");
    }
}
