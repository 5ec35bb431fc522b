//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber with stderr output only.
///
/// `RUST_LOG` wins over `level` when set. Subsequent calls are no-ops, and
/// stdout is left to the report.
pub fn init_subscriber(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // set_global_default is a no-op if already set
    let _ = subscriber.try_init();
}
