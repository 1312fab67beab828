use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "txclean=warn";

/// Install the global subscriber. Diagnostics go to stderr so stdout only
/// carries the run report.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // A subscriber may already be set when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
