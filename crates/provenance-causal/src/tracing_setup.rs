//! Tracing subscriber initialization.

use std::sync::Once;

use provenance_core::config::defaults;
use provenance_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize tracing with compiled defaults.
///
/// Reads the `PROVENANCE_LOG` filter (e.g. `provenance_causal=debug`), falling
/// back to `info`. Idempotent; also a no-op if another subscriber is installed.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize tracing from config. `PROVENANCE_LOG` still wins over `log_level`.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        let result = if config.json_logs {
            tracing_subscriber::registry()
                .with(layer.json())
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(layer)
                .with(filter)
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing_with_config(&ObservabilityConfig {
            log_level: "debug".to_string(),
            json_logs: true,
        });
        tracing::info!("still alive");
    }
}
