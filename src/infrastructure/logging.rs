use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_PATH_ENV: &str = "PAWLIST_LOG";

/// Initializes file logging when `PAWLIST_LOG` is set.
///
/// Logging is off by default: writing to stderr would corrupt the TUI.
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    let Some(log_path) = std::env::var_os(LOG_PATH_ENV) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_ascii_lowercase()));

    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to open log file {}: {err}", log_path.to_string_lossy());
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
