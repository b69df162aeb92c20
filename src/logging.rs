//! Tracing subscriber setup shared by the server and the CLI.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `level` is an `EnvFilter` directive such as `info` or `wikiviews=debug`;
/// an unparseable directive falls back to `info`. `format` selects `json`
/// output, anything else gives human-readable text.
pub fn init(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
