//! Diagnostic logging to stderr.
//!
//! Configure via RUST_LOG, e.g. `RUST_LOG=hosts_toggle=debug`. Defaults to
//! `warn` so normal runs print only the summary.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the stderr subscriber filtered by RUST_LOG.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .with_filter(filter);

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
