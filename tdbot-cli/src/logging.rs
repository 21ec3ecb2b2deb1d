//! Logging setup
//!
//! Logs go to stderr so stdout stays clean for converted output. `RUST_LOG` wins over the
//! configured level; `--debug` wins over both.

use tdbot_config::LogLevel;
use tracing_subscriber::EnvFilter;

/// Pick the filter directive from `--debug`, `RUST_LOG` and the configured level.
pub fn filter_directive(level: LogLevel, debug: bool, env: Option<&str>) -> String {
    if debug {
        return LogLevel::Debug.as_str().to_string();
    }
    match env {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ => level.as_str().to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(level: LogLevel, debug: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(level, debug, env.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
