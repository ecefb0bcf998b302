// ABOUTME: Loads gamaprofit.toml: theme mode, runtime mode, self-check extras and build output
// ABOUTME: Missing file means defaults; an explicitly named file must exist and parse

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use gamaprofit_logging::{LoggingConfig, debug};
use gamaprofit_theme::{ColorRole, ContrastRequirement, Mode, Paint, RuntimeMode, SelfCheck, WcagLevel};

pub const CONFIG_FILE_NAME: &str = "gamaprofit.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub runtime: RuntimeConfig,
    pub self_check: SelfCheckConfig,
    pub build: BuildConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub mode: Mode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub mode: RuntimeMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfCheckConfig {
    /// Threshold for extra contrast pairs that do not set their own
    pub wcag_level: WcagLevel,
    /// Roles that must resolve in addition to the standard ones
    pub required: Vec<ColorRole>,
    pub contrast: Vec<ContrastEntry>,
}

/// An extra contrast pair, e.g. `foreground = "muted"`, `background = "#ffffff"`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContrastEntry {
    pub description: String,
    pub foreground: String,
    pub background: String,
    #[serde(default)]
    pub minimum: Option<f64>,
}

impl ContrastEntry {
    fn to_requirement(&self, level: WcagLevel) -> Result<ContrastRequirement> {
        let paint = |value: &str| -> Result<Paint> {
            value.parse::<Paint>().with_context(|| {
                format!("Invalid paint in contrast pair '{}'", self.description)
            })
        };

        Ok(ContrastRequirement::new(
            self.description.clone(),
            paint(&self.foreground)?,
            paint(&self.background)?,
            self.minimum.unwrap_or_else(|| level.min_normal_text()),
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub out_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// The standard check extended with configured roles and pairs
    pub fn self_check(&self) -> Result<SelfCheck> {
        let mut check = SelfCheck::standard();
        for role in &self.self_check.required {
            check = check.with_required_role(*role);
        }
        for entry in &self.self_check.contrast {
            check = check.with_requirement(entry.to_requirement(self.self_check.wcag_level)?);
        }
        Ok(check)
    }

    pub fn runtime_mode(&self, force_production: bool) -> RuntimeMode {
        if force_production {
            RuntimeMode::Production
        } else {
            self.runtime.mode
        }
    }
}

/// `<config dir>/gamaprofit/gamaprofit.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gamaprofit").join(CONFIG_FILE_NAME))
}
