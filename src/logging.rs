use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup logging.
/// By default, only logs from this crate at the info level are shown.
///
/// The log level can be overridden by setting the `CF_DRAIN_LOG` environment
/// variable, or raised to debug with the hidden `--debug` flag.
/// If the `CF_DRAIN_LOG_ALL` environment variable is set, logs from all
/// crates are shown at the configured level.
pub fn setup_logging(debug: bool) {
    let log_level = if debug {
        "debug".to_string()
    } else {
        std::env::var("CF_DRAIN_LOG").unwrap_or_else(|_| "info".to_string())
    };

    let show_all_logs = std::env::var("CF_DRAIN_LOG_ALL").is_ok();

    let filter = if show_all_logs {
        log_level
    } else {
        format!("cf_drain={}", log_level)
    };

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::new(filter))
        .init();
}
