use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging to stderr so stdout stays free for the terminal UI.
///
/// `RUST_LOG` overrides the default `info` filter.
///
/// ```no_run
/// speaker::init_logging();
/// tracing::info!("ready");
/// ```
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
