//! Tracing subscriber setup for hosts.

use tracing_subscriber::{fmt, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is not set.
///
/// reqwest's connection pool chatter stays at info even in development.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "hyper_util=info".to_string(),
        "reqwest=info".to_string(),
        if is_dev {
            "rd_infra=debug"
        } else {
            "rd_infra=info"
        }
        .to_string(),
    ]
}

/// Installs the global tracing subscriber.
///
/// Call once in `main` before anything logs. Fails when a subscriber is
/// already registered.
pub fn init_tracing() -> anyhow::Result<()> {
    let is_dev = is_development();
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_dev).join(",")));

    fmt()
        .with_env_filter(env_filter)
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to register tracing subscriber: {error}"))
}
