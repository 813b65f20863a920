//! Process-wide log output.

use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

/// Installs the global subscriber.
///
/// Lines carry a local `YYYY-MM-DD HH:MM:SS` timestamp and a colorized level.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_ansi(true)
        .try_init()
}
