use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs the process-wide JSON log subscriber.
///
/// One JSON object per line on stdout with RFC 3339 UTC timestamps. The
/// filter comes from `RUST_LOG` and falls back to `info`. Calling this more
/// than once is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_timer(ChronoUtc::default())
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}
