//! Tracing setup for embedding binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Respects `RUST_LOG` when set; defaults to info-level output for the
/// workspace crates. Safe to call more than once (later calls are
/// no-ops), which keeps test binaries happy.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vibemix=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
