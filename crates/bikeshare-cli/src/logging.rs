//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::LogFormat;

/// Install the global subscriber. `RUST_LOG` wins over the defaults; without
/// it the level is `info`, or `debug` when verbose. Logs go to stderr so
/// command output on stdout stays machine-readable.
pub fn init_logging(verbose: bool, format: LogFormat) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("bikeshare={level},bikeshare_cli={level},warn"))
    });

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(verbose).with_writer(std::io::stderr))
            .init(),
    }
}
