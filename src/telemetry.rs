//! Tracing setup for the CLI.
//!
//! Logs go to stderr so `--json` output on stdout stays clean. The
//! `LR_LOG` env var takes precedence over flags and config.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    pub verbosity: u8,
    pub quiet: bool,
    pub logging: LoggingConfig,
}

impl TelemetryConfig {
    pub fn new(verbosity: u8, quiet: bool, logging: LoggingConfig) -> Self {
        Self {
            verbosity,
            quiet,
            logging,
        }
    }
}

pub fn init(config: TelemetryConfig) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(&config).into())
        .with_env_var("LR_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn default_level(config: &TelemetryConfig) -> LevelFilter {
    if config.quiet {
        return LevelFilter::ERROR;
    }
    match config.verbosity {
        0 => config
            .logging
            .level
            .as_deref()
            .and_then(parse_level)
            .unwrap_or(LevelFilter::WARN),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" | "none" => Some(LevelFilter::OFF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(verbosity: u8, quiet: bool, level: Option<&str>) -> TelemetryConfig {
        TelemetryConfig::new(
            verbosity,
            quiet,
            LoggingConfig {
                level: level.map(String::from),
            },
        )
    }

    #[test]
    fn quiet_wins_over_verbosity() {
        assert_eq!(default_level(&cfg(3, true, None)), LevelFilter::ERROR);
    }

    #[test]
    fn config_level_applies_without_flags() {
        assert_eq!(
            default_level(&cfg(0, false, Some("debug"))),
            LevelFilter::DEBUG
        );
        assert_eq!(default_level(&cfg(0, false, None)), LevelFilter::WARN);
    }

    #[test]
    fn verbosity_overrides_config_level() {
        assert_eq!(
            default_level(&cfg(1, false, Some("error"))),
            LevelFilter::INFO
        );
    }
}
