//! Tracing subscriber setup for the `autopost` binary.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. Logs go to stderr so that
/// `--format json` output on stdout stays machine readable.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}
