use tracing_subscriber::EnvFilter;

/// Initialize stderr logging with a `RUST_LOG`-style filter, defaulting to
/// `info` when the variable is unset or invalid.
pub fn init_logging() -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| err.to_string())
}
