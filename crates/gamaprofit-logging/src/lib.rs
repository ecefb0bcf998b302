// ABOUTME: Tracing setup shared by the GamaProfit crates and the CLI
// ABOUTME: One config type, one init call, and the tracing macros re-exported

pub mod config;
pub mod layers;
pub mod performance;
pub mod subscriber;


// Re-export tracing macros for convenience
pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

pub use config::{ConsoleStyle, LogLevel, LoggingConfig, Rotation};
pub use performance::PerfTimer;
pub use subscriber::{LoggingGuard, init_subscriber};

use anyhow::Result;

/// Initialize logging from the default configuration plus environment overrides.
pub fn init_logging() -> Result<LoggingGuard> {
    init_subscriber(LoggingConfig::from_env()?)
}

/// Initialize logging with a custom configuration.
///
/// Environment overrides still apply on top of `config`.
pub fn init_logging_with_config(mut config: LoggingConfig) -> Result<LoggingGuard> {
    config.apply_env_overrides()?;
    init_subscriber(config)
}
