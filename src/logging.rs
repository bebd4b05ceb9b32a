use tracing_subscriber::EnvFilter;

/// Initialize tracing and bridge `log` to `tracing`.
/// Safe to call more than once; later attempts are ignored.
pub fn init_tracing(enable_debug: bool) {
    // Bridge `log` records into `tracing` so the `log` macros used
    // throughout the app are captured by the subscriber below
    let _ = tracing_log::LogTracer::init();

    let env_filter = if enable_debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .ok();
}
