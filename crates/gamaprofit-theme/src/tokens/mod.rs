// ABOUTME: Design token system mapping semantic color roles to concrete values
// ABOUTME: One complete token set per display mode, keyed by identical roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

#[cfg(test)]
mod tests;

/// Display mode selecting which token set is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Standard (light) appearance
    #[default]
    Light,
    /// Inverted (dark) appearance
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub fn is_dark(self) -> bool {
        matches!(self, Mode::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "standard" => Ok(Mode::Light),
            "dark" | "inverted" => Ok(Mode::Dark),
            other => Err(ThemeError::UnknownMode(other.to_string())),
        }
    }
}

/// Semantic color roles referenced by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorRole {
    /// Brand cobalt: buttons, brand mark, KPI figures
    Primary,
    /// Darker primary for emphasis states
    PrimaryEmphasis,
    /// Body text and headings
    Ink,
    /// Profit green
    Accent,
    /// Section backgrounds
    Surface,
    /// Card and divider borders
    Border,
    /// Secondary text
    Muted,
    /// Low-opacity primary tint for gradient bars
    TintPrimary,
    /// Low-opacity accent tint for gradient bars
    TintAccent,
    /// Hero grid lines
    Grid,
}

impl ColorRole {
    /// Every role, in declaration order
    pub const ALL: [ColorRole; 10] = [
        ColorRole::Primary,
        ColorRole::PrimaryEmphasis,
        ColorRole::Ink,
        ColorRole::Accent,
        ColorRole::Surface,
        ColorRole::Border,
        ColorRole::Muted,
        ColorRole::TintPrimary,
        ColorRole::TintAccent,
        ColorRole::Grid,
    ];

    /// Short role name used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::PrimaryEmphasis => "primary-emphasis",
            ColorRole::Ink => "ink",
            ColorRole::Accent => "accent",
            ColorRole::Surface => "surface",
            ColorRole::Border => "border",
            ColorRole::Muted => "muted",
            ColorRole::TintPrimary => "tint-primary",
            ColorRole::TintAccent => "tint-accent",
            ColorRole::Grid => "grid",
        }
    }

    /// CSS custom property carrying this role
    pub fn css_property(self) -> &'static str {
        match self {
            ColorRole::Primary => "--gp-primary",
            ColorRole::PrimaryEmphasis => "--gp-primary-600",
            ColorRole::Ink => "--gp-ink",
            ColorRole::Accent => "--gp-accent",
            ColorRole::Surface => "--gp-surface",
            ColorRole::Border => "--gp-border",
            ColorRole::Muted => "--gp-muted",
            ColorRole::TintPrimary => "--gp-tint-1",
            ColorRole::TintAccent => "--gp-tint-2",
            ColorRole::Grid => "--gp-grid",
        }
    }

    pub fn from_css_property(property: &str) -> Option<ColorRole> {
        let property = property.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.css_property() == property)
    }

    /// `var(--gp-...)` reference for inline styles
    pub fn var(self) -> String {
        format!("var({})", self.css_property())
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = ThemeError;

    /// Accepts the short name (`ink`) or the custom property (`--gp-ink`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .or_else(|| Self::from_css_property(s))
            .ok_or_else(|| ThemeError::UnknownRole(s.to_string()))
    }
}

/// Complete role-to-value mapping for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSet {
    pub primary: &'static str,
    pub primary_emphasis: &'static str,
    pub ink: &'static str,
    pub accent: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
    pub muted: &'static str,
    pub tint_primary: &'static str,
    pub tint_accent: &'static str,
    pub grid: &'static str,
}

impl TokenSet {
    /// Light theme tokens
    pub const fn light() -> Self {
        Self {
            primary: "#0A5BD3",
            primary_emphasis: "#094BB0",
            ink: "#0D1B2A",
            accent: "#11A36A",
            surface: "#F6F8FB",
            border: "#E5E7EB",
            muted: "#6B7280",
            tint_primary: "rgba(10,91,211,.08)",
            tint_accent: "rgba(17,163,106,.08)",
            grid: "rgba(13,27,42,.06)",
        }
    }

    /// Dark theme tokens
    pub const fn dark() -> Self {
        Self {
            primary: "#6BA4FF",
            primary_emphasis: "#4E85E0",
            ink: "#EAF2FF",
            accent: "#2DD39E",
            surface: "#0B1220",
            border: "#1E293B",
            muted: "#9CA3AF",
            tint_primary: "rgba(107,164,255,.12)",
            tint_accent: "rgba(45,211,158,.12)",
            grid: "rgba(255,255,255,.06)",
        }
    }

    pub const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Light => Self::light(),
            Mode::Dark => Self::dark(),
        }
    }

    pub fn get(&self, role: ColorRole) -> &'static str {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::PrimaryEmphasis => self.primary_emphasis,
            ColorRole::Ink => self.ink,
            ColorRole::Accent => self.accent,
            ColorRole::Surface => self.surface,
            ColorRole::Border => self.border,
            ColorRole::Muted => self.muted,
            ColorRole::TintPrimary => self.tint_primary,
            ColorRole::TintAccent => self.tint_accent,
            ColorRole::Grid => self.grid,
        }
    }

    /// `(role, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &'static str)> + '_ {
        ColorRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}
