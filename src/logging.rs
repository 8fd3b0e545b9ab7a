use tracing_subscriber::{fmt, EnvFilter};

/// Initializes console logging on stderr, filtered by `RUST_LOG` (default `info`).
///
/// Stdout is left to the report so `--json` output stays parseable.
pub fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
