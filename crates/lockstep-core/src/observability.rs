//! Observability infrastructure for Lockstep.
//!
//! Structured logging with consistent spans: every lease operation runs
//! inside a span carrying the operation name and resource id, so a grep for
//! a resource id reconstructs its full lease history.

use std::sync::Once;
use tracing::Span;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Log output format.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogFormat {
    /// JSON structured logs (for production).
    Json,
    /// Pretty-printed logs (for development).
    #[default]
    Pretty,
}

/// Initializes the logging subsystem.
///
/// Call once at application startup. Safe to call multiple times;
/// subsequent calls are no-ops.
///
/// # Environment Variables
///
/// - `RUST_LOG`: Controls log levels (e.g., `info`, `lockstep_lease=debug`)
///
/// # Example
///
/// ```rust
/// use lockstep_core::observability::{init_logging, LogFormat};
///
/// init_logging(LogFormat::Pretty);
/// ```
pub fn init_logging(format: LogFormat) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        match format {
            LogFormat::Json => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().json())
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().pretty())
                    .init();
            }
        }
    });
}

/// Creates a span for lease operations with standard fields.
///
/// # Example
///
/// ```rust
/// use lockstep_core::observability::lease_span;
///
/// let span = lease_span("acquire", "printer-1");
/// let _guard = span.enter();
/// // ... run the lease operation
/// ```
#[must_use]
pub fn lease_span(operation: &str, resource: &str) -> Span {
    tracing::info_span!("lease", op = operation, resource = resource)
}
