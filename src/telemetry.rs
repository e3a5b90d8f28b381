//! Telemetry helpers for hosts embedding `tumor-chart`.
//!
//! The engine only emits `tracing` events; installing a subscriber is the
//! host's call. `init_default_tracing` is a convenience for binaries and
//! quick experiments.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "tumor_chart=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
