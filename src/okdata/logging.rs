use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `debug` forces the `debug` level; otherwise `RUST_LOG`
/// applies, defaulting to `warn`.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be set in tests; keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
