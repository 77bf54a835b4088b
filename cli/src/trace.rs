use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

// stderr is reserved for verification diagnostics, so tracing stays quiet
// unless RUST_LOG asks for more.
const DEFAULT_TRACE_FILTER: &str = "error";

/// Installs the stderr tracing subscriber for a kernel executable.
pub fn init() {
    let builder = fmt().with_writer(std::io::stderr);
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|expr| EnvFilter::try_new(expr).ok());
    let builder = match filter {
        Some(filter) => builder.with_env_filter(filter),
        None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
    };
    let _ = builder.try_init();
}
