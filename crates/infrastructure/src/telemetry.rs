//! Telemetry setup
//!
//! Structured logging via `tracing`. Everything goes to stderr so that
//! stdout stays reserved for the wire protocol.

use application::ApplicationError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryAppConfig;

/// Initialize the global tracing subscriber
///
/// The filter comes from `RUST_LOG` when set, otherwise from the
/// verbosity level (0 = info, 1 = debug, 2+ = trace).
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryAppConfig, verbosity: u8) -> Result<(), ApplicationError> {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ApplicationError::Configuration(format!("Failed to init telemetry: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent_within_process() {
        let config = TelemetryAppConfig::default();
        // First call may succeed or fail depending on test ordering; the
        // second must fail because a subscriber is already installed.
        let _ = init_telemetry(&config, 0);
        let second = init_telemetry(&config, 1);
        assert!(second.is_err());
    }
}
