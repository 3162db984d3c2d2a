use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for a command-line tool
///
/// Configures logging with appropriate log levels for different components:
/// - Info level for this crate by default
/// - The `RUST_LOG` environment variable can raise or lower verbosity
///
/// Diagnostics go to stderr so that stdout stays reserved for tool output.
pub fn init() {
    let filter = EnvFilter::from_default_env()
        .add_directive("chain_utils=info".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
