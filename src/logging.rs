use color_eyre::eyre::Result;
use tracing::Level;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Crate target used for the default `EnvFilter` directive.
pub const LOG_TARGET: &str = "git_remote_url";

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default log level when `RUST_LOG` is not set.
    pub log_level: Level,
    /// Whether to use JSON format for logs.
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: Level::WARN,
            json_format: false,
        }
    }
}

impl LogConfig {
    /// Filter directive applied when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_directive(&self) -> String {
        format!("{LOG_TARGET}={}", self.log_level)
    }
}

/// Initialize the logging system with the given configuration.
///
/// Logs go to stderr so that stdout carries only parse results. The level is
/// runtime configurable through `RUST_LOG`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    if config.json_format {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_target(true)
            .with_filter(env_filter);

        tracing_subscriber::registry()
            .with(json_layer)
            .with(ErrorLayer::default())
            .try_init()?;
    } else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(true)
            .with_filter(env_filter);

        tracing_subscriber::registry()
            .with(stderr_layer)
            .with(ErrorLayer::default())
            .try_init()?;
    }

    Ok(())
}

/// Parse a log level name; unknown names fall back to `warn`.
#[must_use]
pub fn parse_level(s: &str) -> Level {
    match s.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
