// ABOUTME: Development-time accessibility self-check run once per page mount
// ABOUTME: Asserts required tokens resolve and key text pairs meet WCAG contrast

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use gamaprofit_logging::{PerfTimer, debug, info, warn};

use crate::color::{Rgb, normalize, parse_color};
use crate::contrast::{ContrastRatios, contrast_ratio};
use crate::error::ThemeError;
use crate::style_source::StyleSource;
use crate::tokens::ColorRole;

/// Build environment the page runs in. Only development runs the self-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    #[default]
    Development,
    Production,
}

impl RuntimeMode {
    pub fn is_production(self) -> bool {
        matches!(self, RuntimeMode::Production)
    }
}

/// One side of a contrast pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Resolved through the style source at check time
    Token(ColorRole),
    /// A literal color
    Fixed(Rgb),
}

impl Paint {
    pub const WHITE: Paint = Paint::Fixed(Rgb::WHITE);

    /// Resolve to a color. Missing or malformed token values become black.
    pub fn resolve<S: StyleSource + ?Sized>(&self, source: &S) -> Rgb {
        match self {
            Paint::Token(role) => source
                .property_value(role.css_property())
                .map(|value| normalize(&value))
                .unwrap_or(Rgb::BLACK),
            Paint::Fixed(rgb) => *rgb,
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Token(role) => write!(f, "{}", role.css_property()),
            Paint::Fixed(rgb) => write!(f, "{rgb}"),
        }
    }
}

impl FromStr for Paint {
    type Err = ThemeError;

    /// A role name or custom property, else a strict color literal
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(role) = s.parse::<ColorRole>() {
            return Ok(Paint::Token(role));
        }
        parse_color(s)
            .map(|value| Paint::Fixed(value.rgb))
            .map_err(|err| ThemeError::invalid_color(s.trim(), err))
    }
}

impl From<ColorRole> for Paint {
    fn from(role: ColorRole) -> Self {
        Paint::Token(role)
    }
}

/// A foreground/background pair that must reach a minimum ratio
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastRequirement {
    pub description: String,
    pub foreground: Paint,
    pub background: Paint,
    pub minimum: f64,
}

impl ContrastRequirement {
    pub fn new(
        description: impl Into<String>,
        foreground: impl Into<Paint>,
        background: impl Into<Paint>,
        minimum: f64,
    ) -> Self {
        Self {
            description: description.into(),
            foreground: foreground.into(),
            background: background.into(),
            minimum,
        }
    }
}

/// A failed assertion. Advisory only; never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum AssertionFailure {
    MissingToken {
        property: &'static str,
    },
    InsufficientContrast {
        description: String,
        foreground: Rgb,
        background: Rgb,
        required: f64,
        actual: f64,
    },
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssertionFailure::MissingToken { property } => write!(f, "Missing token {property}"),
            AssertionFailure::InsufficientContrast {
                description,
                required,
                ..
            } => {
                let level = if *required >= ContrastRatios::AAA_NORMAL {
                    "AAA"
                } else {
                    "AA"
                };
                write!(f, "{description} should pass {level}")
            }
        }
    }
}

/// Outcome of one self-check run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelfCheckReport {
    pub checks_run: usize,
    pub failures: Vec<AssertionFailure>,
}

impl SelfCheckReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// A production run checks nothing
    pub fn skipped(&self) -> bool {
        self.checks_run == 0
    }
}

impl fmt::Display for SelfCheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.skipped() {
            return f.write_str("self-check skipped");
        }
        write!(
            f,
            "{} checks, {} failed",
            self.checks_run,
            self.failures.len()
        )
    }
}

/// The fixed assertion lists evaluated against a style source
#[derive(Debug, Clone, PartialEq)]
pub struct SelfCheck {
    required: Vec<ColorRole>,
    contrast: Vec<ContrastRequirement>,
}

impl SelfCheck {
    /// Primary, ink and accent must be set; ink on white and white on
    /// primary must pass AA for normal text.
    pub fn standard() -> Self {
        Self {
            required: vec![ColorRole::Primary, ColorRole::Ink, ColorRole::Accent],
            contrast: vec![
                ContrastRequirement::new(
                    "Ink on white",
                    ColorRole::Ink,
                    Paint::WHITE,
                    ContrastRatios::AA_NORMAL,
                ),
                ContrastRequirement::new(
                    "White on primary",
                    Paint::WHITE,
                    ColorRole::Primary,
                    ContrastRatios::AA_NORMAL,
                ),
            ],
        }
    }

    pub fn with_required_role(mut self, role: ColorRole) -> Self {
        if !self.required.contains(&role) {
            self.required.push(role);
        }
        self
    }

    pub fn with_requirement(mut self, requirement: ContrastRequirement) -> Self {
        self.contrast.push(requirement);
        self
    }

    pub fn required_roles(&self) -> &[ColorRole] {
        &self.required
    }

    pub fn requirements(&self) -> &[ContrastRequirement] {
        &self.contrast
    }

    /// Run every assertion against `source`.
    ///
    /// Production is a no-op. Failures are logged at WARN and collected;
    /// one failing assertion never stops the rest.
    pub fn run<S: StyleSource + ?Sized>(&self, source: &S, runtime: RuntimeMode) -> SelfCheckReport {
        if runtime.is_production() {
            return SelfCheckReport::default();
        }

        let _timer = PerfTimer::new("self_check");
        let mut report = SelfCheckReport::default();

        for role in &self.required {
            report.checks_run += 1;
            let property = role.css_property();
            let present = source
                .property_value(property)
                .is_some_and(|value| !value.trim().is_empty());

            if present {
                debug!(property, "Token present");
            } else {
                let failure = AssertionFailure::MissingToken { property };
                warn!(property, "{}", failure);
                report.failures.push(failure);
            }
        }

        for requirement in &self.contrast {
            report.checks_run += 1;
            let foreground = requirement.foreground.resolve(source);
            let background = requirement.background.resolve(source);
            let actual = contrast_ratio(foreground, background);

            if actual >= requirement.minimum {
                debug!(
                    description = %requirement.description,
                    ratio = actual,
                    "Contrast requirement met"
                );
                continue;
            }

            let failure = AssertionFailure::InsufficientContrast {
                description: requirement.description.clone(),
                foreground,
                background,
                required: requirement.minimum,
                actual,
            };
            warn!(
                foreground = %foreground,
                background = %background,
                required = requirement.minimum,
                actual,
                "{}",
                failure
            );
            report.failures.push(failure);
        }

        info!(
            checks = report.checks_run,
            failures = report.failures.len(),
            "Self-check finished"
        );
        report
    }
}

impl Default for SelfCheck {
    fn default() -> Self {
        Self::standard()
    }
}

/// Runs a self-check at most once, on the first mount of a page.
#[derive(Debug, Default)]
pub struct SelfCheckRunner {
    check: SelfCheck,
    mounted: AtomicBool,
}

impl SelfCheckRunner {
    pub fn new(check: SelfCheck) -> Self {
        Self {
            check,
            mounted: AtomicBool::new(false),
        }
    }

    /// Run on the first call; `None` afterwards and in production.
    pub fn on_mount<S: StyleSource + ?Sized>(
        &self,
        source: &S,
        runtime: RuntimeMode,
    ) -> Option<SelfCheckReport> {
        if runtime.is_production() || self.mounted.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(self.check.run(source, runtime))
    }

    pub fn has_run(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }
}
