use tracing_subscriber::EnvFilter;

/// Initialise logging. The level defaults to `info` and is raised to `debug`
/// when the settings file asks for it.
pub fn init(debug: bool) {
    // With debug logging disabled the level is pinned to `info` so a stray
    // `RUST_LOG` in the environment cannot make the widget chatty.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
