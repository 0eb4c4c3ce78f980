// Logging module - tracing subscriber setup
//
// The terminal UI owns the screen, so in TUI mode nothing is written to the
// terminal: only the optional JSON file layer is installed. Headless mode
// keeps stdout for log-panel content and writes human-readable logs to stderr.
//
// Filter precedence: RUST_LOG env var > config file level > "info"

use crate::config::{LogRotation, LoggingConfig};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when RUST_LOG is unset
pub fn default_directive(logging: &LoggingConfig) -> String {
    format!("logreel={}", logging.level)
}

/// Install the global tracing subscriber
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the duration of the program.
pub fn init_tracing(logging: &LoggingConfig, tui: bool) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(logging).into());

    let file = if logging.file_enabled {
        file_writer(logging)
    } else {
        None
    };

    let (writer, guard) = match file {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    // File layer uses JSON format for structured log parsing
    let file_layer = writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
    });

    let stderr_layer =
        (!tui).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Rolling, non-blocking file writer. None if the log directory can't be made.
fn file_writer(logging: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    // Create log directory if it doesn't exist
    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    // Create rolling file appender based on configured rotation
    let appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    // Wrap in non-blocking writer (writes happen in background thread)
    Some(tracing_appender::non_blocking(appender))
}
