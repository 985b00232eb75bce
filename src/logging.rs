use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Initializes logging with console output and, if enabled, a rolling JSON file.
///
/// The console layer writes to stderr so stdout stays free for mapped output.
/// Keep the returned guard alive until exit so file logs get flushed.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    // Respect RUST_LOG if set; otherwise use the configured directive
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = if config.file_output {
        // Ensure logs directory exists
        let _ = fs::create_dir_all(&config.directory);

        let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

        (Some(fmt::layer().json().with_writer(non_blocking_writer)), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
