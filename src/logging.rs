//! Diagnostic logging for the command line.
//!
//! Output goes to stderr so stdout stays clean for JSON results. Filtering follows
//! `RUST_LOG` when set, e.g. `RUST_LOG=scratchmark::section=debug` to watch parent
//! resolution, and otherwise the configured level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
