/*!
 * Structured Tracing
 * Subscriber setup for the binder's tracing events
 *
 * Features:
 * - `EnvFilter` driven log levels
 * - JSON-formatted logs for structured parsing
 * - Compact human-readable output for development
 */

use crate::config::BinderConfig;
use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Install the global tracing subscriber described by `config`
///
/// Returns `false` when a subscriber was already installed, in which case the
/// existing one is kept.
pub fn init_tracing(config: &BinderConfig) -> bool {
    let env_filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.trace_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
            .is_ok()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        info!(json = config.trace_json, filter = %config.log_filter, "Structured tracing initialized");
    }
    installed
}
