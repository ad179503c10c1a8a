//! Structured logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// The configured level is the default; `RUST_LOG` overrides it when set.
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("tinyserve={log_level},tower_http={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
