// ABOUTME: Error types for theme token lookup and color parsing
// ABOUTME: Self-check findings are not errors and live in the self_check module

use thiserror::Error;

use crate::color::ColorParseError;

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown color role '{0}'")]
    UnknownRole(String),

    #[error("unknown theme mode '{0}', expected 'light' or 'dark'")]
    UnknownMode(String),

    #[error("invalid color for {role}: {source}")]
    InvalidColor {
        role: String,
        #[source]
        source: ColorParseError,
    },
}

impl ThemeError {
    pub fn invalid_color<S: Into<String>>(role: S, source: ColorParseError) -> Self {
        Self::InvalidColor {
            role: role.into(),
            source,
        }
    }
}
