//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when neither `RUST_LOG` nor the config sets one.
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// Sets up a registry with:
/// 1. an `EnvFilter` built from `RUST_LOG` if set, else from
///    `config.trace_level`, else `"info"`
/// 2. a fmt layer writing compact lines to stderr, so stdout stays free for
///    rendered output
///
/// # Initialization Behavior
///
/// - An invalid `trace_level` falls back to the default level
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use get_my_books::observability::init_tracing;
/// use get_my_books::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact());

    let _ = subscriber.try_init();
}
