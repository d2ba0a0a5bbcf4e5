//! Logging setup
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=scrubber::scrub=trace` - every emitted scrub edit
//!
//! Logs are also written to `~/.config/scrubber/logs/scrubber.log` with daily
//! rotation, at debug level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing with a console layer and a rolling file layer.
///
/// Keep the returned guard alive for the life of the process so buffered file
/// output is flushed on exit.
pub fn init() -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr; stdout carries command output.
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let (file_layer, guard) = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "scrubber.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
