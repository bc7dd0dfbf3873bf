//! Operator-facing diagnostics: list repairs, rejected peers, skipped rows.
//!
//! Reads `RUST_LOG`. Defaults to `info` if unset. Output goes to stderr so that
//! reports on stdout stay machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
