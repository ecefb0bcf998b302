// ABOUTME: Installs the global subscriber from a LoggingConfig
// ABOUTME: Returns the guard that keeps the file writer flushing

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

use crate::config::LoggingConfig;
use crate::layers::{
    BoxedLayer, create_console_layer, create_env_filter, create_file_layer, create_json_layer,
};

/// Hold until shutdown; dropping it stops file logging.
#[must_use = "dropping the guard stops file logging"]
#[derive(Default)]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Install the process-wide subscriber. Fails if one is already set.
pub fn init_subscriber(config: LoggingConfig) -> Result<LoggingGuard> {
    let filter = create_env_filter(&config)?;

    let (file_layer, file_guard) = if config.output.file {
        let (layer, guard) = create_file_layer(&config.file)?;
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let layers: Vec<BoxedLayer> = [
        create_console_layer(&config.output),
        create_json_layer(&config.output),
        file_layer,
    ]
    .into_iter()
    .flatten()
    .collect();

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .context("Logging was already initialized")?;

    tracing::debug!(
        level = %config.level,
        console = config.output.console,
        json = config.output.json,
        file = ?config.output.file.then_some(&config.file.path),
        "Logging ready"
    );

    Ok(LoggingGuard { _file: file_guard })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;

    // The global subscriber can be installed once per test binary, so the
    // success and failure cases share one test.
    #[test]
    fn test_second_init_fails() {
        let quiet = LoggingConfig {
            output: OutputConfig {
                console: false,
                ..OutputConfig::default()
            },
            ..LoggingConfig::default()
        };
        let _guard = init_subscriber(quiet).unwrap();

        let err = init_subscriber(LoggingConfig::default()).err().unwrap();
        assert!(err.to_string().contains("already initialized"));
    }
}
