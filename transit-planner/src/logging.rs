//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber that writes to stderr.
///
/// The filter comes from `RUST_LOG`; if that is unset or unparsable,
/// `default_directive` is used instead.
pub fn init_logging(default_directive: &str) {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(rust_log) => EnvFilter::try_new(&rust_log).unwrap_or_else(|err| {
            eprintln!(
                "invalid {}, falling back to '{default_directive}': {err}",
                EnvFilter::DEFAULT_ENV
            );
            EnvFilter::new(default_directive)
        }),
        Err(_) => EnvFilter::new(default_directive),
    };

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
