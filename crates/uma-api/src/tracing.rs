//! Log output for the service.
//!
//! Development logs are pretty-printed with source locations; production logs
//! are flattened JSON lines. `RUST_LOG` replaces the default filter.

use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Crates whose events are shown at the environment's level.
const SERVICE_TARGETS: &[&str] = &["serv", "uma_api", "uma_store", "tower_http"];

/// Install the global subscriber for `env`.
pub fn init_tracing(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if env.is_production() {
        builder
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .init();
    } else {
        builder.pretty().with_file(true).with_line_number(true).init();
    }

    tracing::info!(environment = ?env, "Tracing initialized");
}

/// Service crates at `debug` (development) or `info` (production), everything
/// else at `warn`.
fn default_directives(env: &Environment) -> String {
    let level = if env.is_production() { "info" } else { "debug" };

    SERVICE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .chain(std::iter::once("warn".to_string()))
        .collect::<Vec<_>>()
        .join(",")
}
