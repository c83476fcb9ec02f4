//! Logging system initialization
//!
//! Sets up `tracing` from the `[logging]` section: console or file output,
//! optional daily rotation, text or JSON format.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{Result, ShopError};

const DEFAULT_LOG_FILE_NAME: &str = "petalshop.log";

/// Initialize the global subscriber.
///
/// Call once, after configuration is loaded. The returned guard must stay
/// alive for the whole process so buffered log lines get flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let writer = build_writer(config)?;
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);

    let filter = tracing_subscriber::EnvFilter::try_new(&config.level).map_err(|e| {
        ShopError::config(format!("Invalid logging.level '{}': {}", config.level, e))
    })?;

    let to_console = config.file.as_ref().is_none_or(|f| f.is_empty());
    let builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(to_console);

    let installed = if config.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| ShopError::internal(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

fn build_writer(config: &LoggingConfig) -> Result<Box<dyn std::io::Write + Send + Sync>> {
    let Some(log_file) = config.file.as_deref().filter(|f| !f.is_empty()) else {
        return Ok(Box::new(std::io::stdout()));
    };

    let path = Path::new(log_file);
    if config.enable_rotation {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(DEFAULT_LOG_FILE_NAME);

        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups.max(1) as usize)
            .build(dir)
            .map_err(|e| {
                ShopError::file_operation(format!("Failed to create rolling log appender: {}", e))
            })?;
        Ok(Box::new(appender))
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_plain_file_writer_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("shop.log");
        let config = LoggingConfig {
            file: Some(log_path.display().to_string()),
            enable_rotation: false,
            ..LoggingConfig::default()
        };

        let mut writer = build_writer(&config).unwrap();
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&log_path).unwrap(), "hello\n");
    }
}
