// ABOUTME: Logging settings as read from the [logging] table and the environment
// ABOUTME: Levels, per-target overrides, output sinks and the log file location

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

/// Overrides the configured level; takes precedence over `RUST_LOG`
pub const LEVEL_ENV: &str = "GAMAPROFIT_LOG";
pub const JSON_ENV: &str = "GAMAPROFIT_LOG_JSON";
pub const NO_CONSOLE_ENV: &str = "GAMAPROFIT_LOG_NO_CONSOLE";
/// Enables file output; a non-empty value replaces the file path
pub const FILE_ENV: &str = "GAMAPROFIT_LOG_FILE";

/// A `tracing::Level` that reads and writes as a lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogLevel(pub Level);

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" | "warning" => Level::WARN,
            "error" => Level::ERROR,
            other => bail!("unknown log level '{other}' (expected trace, debug, info, warn or error)"),
        };
        Ok(Self(level))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_string()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Level's own Display is uppercase
        f.write_str(&self.0.as_str().to_ascii_lowercase())
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        Self(level)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Target-specific levels, e.g. `gamaprofit_theme = "debug"`
    pub module_levels: HashMap<String, LogLevel>,
    pub output: OutputConfig,
    pub file: FileConfig,
}

/// Which sinks receive events. JSON replaces the human console format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub console: bool,
    pub console_style: ConsoleStyle,
    pub json: bool,
    pub file: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStyle {
    /// One line per event, no timestamps
    #[default]
    Compact,
    /// Multi-line output with targets and span timings
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    Daily,
    Hourly,
    Never,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub path: PathBuf,
    pub rotation: Rotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(Level::INFO),
            module_levels: HashMap::new(),
            output: OutputConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console: true,
            console_style: ConsoleStyle::Compact,
            json: false,
            file: false,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: dirs::data_local_dir()
                .map(|dir| dir.join("gamaprofit"))
                .unwrap_or_default()
                .join("gamaprofit.log"),
            rotation: Rotation::Daily,
        }
    }
}

impl LoggingConfig {
    /// Defaults with the environment applied on top.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = env::var(LEVEL_ENV) {
            self.level = value
                .parse::<LogLevel>()
                .with_context(|| format!("{LEVEL_ENV}={value}"))?;
        } else if let Ok(value) = env::var("RUST_LOG") {
            self.apply_directives(&value)?;
        }

        self.output.json |= env::var_os(JSON_ENV).is_some();
        if env::var_os(NO_CONSOLE_ENV).is_some() {
            self.output.console = false;
        }
        if let Ok(path) = env::var(FILE_ENV) {
            self.output.file = true;
            if !path.is_empty() {
                self.file.path = path.into();
            }
        }
        Ok(())
    }

    /// Apply `RUST_LOG`-style directives: `warn,gamaprofit_theme=debug`.
    ///
    /// A bare level sets the global level; `target=level` adds an override.
    pub fn apply_directives(&mut self, directives: &str) -> Result<()> {
        let directives = directives.split(',').map(str::trim).filter(|d| !d.is_empty());
        for directive in directives {
            match directive.split_once('=') {
                Some((target, level)) => {
                    let level = level
                        .parse::<LogLevel>()
                        .with_context(|| format!("in directive for target '{target}'"))?;
                    self.module_levels.insert(target.to_owned(), level);
                }
                None => self.level = directive.parse::<LogLevel>()?,
            }
        }
        Ok(())
    }
}
