//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Workforce tracing/logging system.
///
/// Reads the `WORKFORCE_LOG` environment variable for per-subsystem log
/// levels, e.g. `WORKFORCE_LOG=workforce_engine=debug,workforce_core=info`.
///
/// Falls back to `workforce=info` if `WORKFORCE_LOG` is not set or is
/// invalid. Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("WORKFORCE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("workforce=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
