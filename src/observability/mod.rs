//! Observability
//!
//! Structured logging setup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::config::LoggingConfig;

/// Log file name prefix inside `log_dir`; files rotate daily.
const LOG_FILE_PREFIX: &str = "mood-tracker.log";

/// Filter from `RUST_LOG`, else from the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(directives.as_deref(), &config.level)
}

/// The first valid of `directives` and `level`, else `info`.
fn filter_from(directives: Option<&str>, level: &str) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global tracing subscriber
///
/// Logs go to stdout, and also to a daily rolling file when `log_dir` is set.
/// The returned guard flushes the file writer and must be kept alive.
pub fn init_tracing(config: &LoggingConfig) -> Option<WorkerGuard> {
    let (file_writer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = if config.structured {
        registry
            .with(fmt::layer().json().with_target(true).with_line_number(true))
            .with(file_writer.map(|w| fmt::layer().json().with_ansi(false).with_writer(w)))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(file_writer.map(|w| fmt::layer().with_ansi(false).with_writer(w)))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {}", e);
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tracing_subscriber::filter::LevelFilter;

    #[rstest]
    #[case(None, "mood_tracker=loud", LevelFilter::INFO)]
    #[case(None, "debug", LevelFilter::DEBUG)]
    #[case(Some(""), "warn", LevelFilter::WARN)]
    #[case(Some("error"), "debug", LevelFilter::ERROR)]
    #[case(Some("mood_tracker=loud"), "trace", LevelFilter::TRACE)]
    fn test_filter_precedence(
        #[case] directives: Option<&str>,
        #[case] level: &str,
        #[case] expected: LevelFilter,
    ) {
        let filter = filter_from(directives, level);
        assert_eq!(filter.max_level_hint(), Some(expected));
    }
}
