use crate::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Daily-rotated appender at `{directory}/{file_name}.YYYY-MM-DD`.
fn file_appender(config: &LoggingConfig) -> RollingFileAppender {
    let _ = std::fs::create_dir_all(&config.directory);
    tracing_appender::rolling::daily(&config.directory, &config.file_name)
}

pub fn initialize_logging(config: &LoggingConfig) -> WorkerGuard {
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(config));

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    tracing::info!("Logging to {}/{}", config.directory, config.file_name);
    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn appender_uses_configured_directory_and_name() {
        let dir = tempdir().unwrap();
        let config = LoggingConfig {
            directory: dir.path().join("logs").to_string_lossy().into_owned(),
            file_name: "session.log".to_string(),
        };

        let mut appender = file_appender(&config);
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = std::fs::read_dir(&config.directory)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("session.log"), "got {names:?}");
    }
}
