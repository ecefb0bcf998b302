// ABOUTME: WCAG 2.1 relative luminance and contrast ratio calculations
// ABOUTME: Pure functions plus the conformance thresholds used by the self-check

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Standard WCAG contrast thresholds
pub struct ContrastRatios;

impl ContrastRatios {
    pub const AA_NORMAL: f64 = 4.5;
    pub const AA_LARGE: f64 = 3.0;
    pub const AAA_NORMAL: f64 = 7.0;
    pub const AAA_LARGE: f64 = 4.5;
}

/// WCAG compliance levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WcagLevel {
    /// WCAG 2.1 Level A
    A,
    /// WCAG 2.1 Level AA
    #[default]
    AA,
    /// WCAG 2.1 Level AAA
    AAA,
}

impl WcagLevel {
    /// Minimum ratio for normal-size text at this level.
    pub fn min_normal_text(self) -> f64 {
        match self {
            WcagLevel::A => ContrastRatios::AA_LARGE,
            WcagLevel::AA => ContrastRatios::AA_NORMAL,
            WcagLevel::AAA => ContrastRatios::AAA_NORMAL,
        }
    }

    /// Minimum ratio for large text at this level.
    pub fn min_large_text(self) -> f64 {
        match self {
            WcagLevel::A | WcagLevel::AA => ContrastRatios::AA_LARGE,
            WcagLevel::AAA => ContrastRatios::AAA_LARGE,
        }
    }
}

/// sRGB channel (0-255) to linear light.
///
/// Uses the 0.03928 knee of the WCAG 2.x definition.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`.
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// Contrast ratio between two colors, in `[1, 21]` and independent of argument order.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);

    let lighter = la.max(lb);
    let darker = la.min(lb);

    (lighter + 0.05) / (darker + 0.05)
}
