//! Opt-in tracing setup for hosts embedding `dashboard-enhancer`.
//!
//! Hosts with their own subscriber can skip this module entirely; every
//! event the crate emits is under the `dashboard_enhancer` target.

/// Filter used when `RUST_LOG` is unset: the enhancer's own debug events
/// (bootstrap, applied settings, augmentation batches) and warnings from
/// everything else.
pub const DEFAULT_TRACING_FILTER: &str = "warn,dashboard_enhancer=debug";

/// Installs a compact `fmt` subscriber when the `telemetry` feature is on.
///
/// Returns `false` when the feature is off or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .without_time()
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
