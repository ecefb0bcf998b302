// ABOUTME: Builds the individual tracing layers: console, JSON, rolling file
// ABOUTME: and the level filter derived from LoggingConfig

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::{ConsoleStyle, FileConfig, LoggingConfig, OutputConfig, Rotation};

pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Human-readable output on stderr, unless JSON output replaces it.
pub fn create_console_layer(output: &OutputConfig) -> Option<BoxedLayer> {
    if !output.console || output.json {
        return None;
    }

    let base = fmt::layer().with_writer(std::io::stderr);
    Some(match output.console_style {
        ConsoleStyle::Compact => base.compact().without_time().with_target(false).boxed(),
        ConsoleStyle::Pretty => base
            .pretty()
            .with_span_events(FmtSpan::CLOSE)
            .with_file(false)
            .with_line_number(false)
            .boxed(),
    })
}

/// One JSON object per event on stderr.
pub fn create_json_layer(output: &OutputConfig) -> Option<BoxedLayer> {
    output.json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed()
    })
}

/// Plain-text file output through a background writer.
///
/// Missing parent directories are created. Keep the guard alive for as long
/// as events may be written; dropping it flushes the buffer.
pub fn create_file_layer(file: &FileConfig) -> Result<(BoxedLayer, WorkerGuard)> {
    let (directory, name) = split_log_path(&file.path)?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let appender = match file.rotation {
        Rotation::Daily => rolling::daily(directory, name),
        Rotation::Hourly => rolling::hourly(directory, name),
        Rotation::Never => rolling::never(directory, name),
    };
    let (writer, guard) = non_blocking(appender);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .boxed();
    Ok((layer, guard))
}

fn split_log_path(path: &Path) -> Result<(&Path, &str)> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("Log file path {} has no file name", path.display()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((directory, name))
}

/// Global level plus one directive per target override.
pub fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let mut filter = EnvFilter::new(config.level.to_string());
    for (target, level) in &config.module_levels {
        let directive = format!("{target}={level}")
            .parse::<Directive>()
            .with_context(|| format!("Invalid log target '{target}'"))?;
        filter = filter.add_directive(directive);
    }
    Ok(filter)
}
