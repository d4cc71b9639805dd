//! Logger setup backed by `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `<name>=<default_level>` is used,
/// with `-` in `name` replaced by `_` to match the crate's target name.
///
/// Calling this more than once is harmless: later calls leave the
/// already-installed subscriber in place and return `false`.
pub fn setup_logger(name: &str, default_level: &str) -> bool {
    let target = name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{target}={default_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}
