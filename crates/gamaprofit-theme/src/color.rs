// ABOUTME: Color representation and parsing for theme token values
// ABOUTME: Lenient normalization for runtime checks plus a strict parser for authoring

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// `rgb(r, g, b)` anywhere in the value, case-insensitive. `rgba(` never matches.
static RGB_LENIENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)")
        .expect("rgb pattern is valid")
});

/// The whole value is `rgb(r, g, b)` or `rgba(r, g, b, a)`, case-insensitive.
static RGB_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$")
        .expect("rgb function pattern is valid")
});

/// An opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A parsed color string: the opaque color plus its alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorValue {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl ColorValue {
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length: expected 3 or 6 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digits in '{0}'")]
    InvalidHex(String),
    #[error("not a hex color or rgb()/rgba() function: '{0}'")]
    InvalidFunc(String),
    #[error("component out of range in '{0}'")]
    OutOfRange(String),
}

impl FromStr for ColorValue {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Normalize a color string to RGB without ever failing.
///
/// Accepts `#rrggbb` (and the `#rgb` shorthand) or `rgb(r, g, b)`. Longer
/// hex strings such as `#rrggbbaa` keep their first six digits. Anything
/// else, `rgba(...)` included, is black. Channels above 255 saturate
/// instead of being rejected.
pub fn normalize(input: &str) -> Rgb {
    let s = input.trim();

    if let Some(hex) = s.strip_prefix('#') {
        let hex = hex.get(..6).unwrap_or(hex);
        return parse_hex(hex).unwrap_or(Rgb::BLACK);
    }

    match RGB_LENIENT.captures(s) {
        Some(caps) => Rgb::new(
            saturating_channel(&caps[1]),
            saturating_channel(&caps[2]),
            saturating_channel(&caps[3]),
        ),
        None => Rgb::BLACK,
    }
}

/// Strictly parse a color string, reporting why it is malformed.
pub fn parse_color(input: &str) -> Result<ColorValue, ColorParseError> {
    use ColorParseError::*;

    let s = input.trim();
    if s.is_empty() {
        return Err(Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        let rgb = parse_hex(hex)?;
        return Ok(ColorValue { rgb, alpha: 1.0 });
    }

    let caps = RGB_FUNCTION
        .captures(s)
        .ok_or_else(|| InvalidFunc(s.to_string()))?;

    let channel = |i: usize| -> Result<u8, ColorParseError> {
        caps[i]
            .parse::<u8>()
            .map_err(|_| OutOfRange(s.to_string()))
    };
    let rgb = Rgb::new(channel(1)?, channel(2)?, channel(3)?);

    let alpha = match caps.get(4) {
        Some(a) => a
            .as_str()
            .parse::<f32>()
            .ok()
            .filter(|a| (0.0..=1.0).contains(a))
            .ok_or_else(|| OutOfRange(s.to_string()))?,
        None => 1.0,
    };

    Ok(ColorValue { rgb, alpha })
}

fn parse_hex(hex: &str) -> Result<Rgb, ColorParseError> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(hex.to_string()));
    }

    let digit = |i: usize| -> u8 {
        // Validated above
        (hex.as_bytes()[i] as char).to_digit(16).unwrap_or(0) as u8
    };

    match hex.len() {
        3 => Ok(Rgb::new(digit(0) * 17, digit(1) * 17, digit(2) * 17)),
        6 => Ok(Rgb::new(
            digit(0) << 4 | digit(1),
            digit(2) << 4 | digit(3),
            digit(4) << 4 | digit(5),
        )),
        len => Err(ColorParseError::InvalidLength(len)),
    }
}

fn saturating_channel(digits: &str) -> u8 {
    digits
        .parse::<u32>()
        .map_or(u8::MAX, |v| v.min(u32::from(u8::MAX)) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize("#0A5BD3"), Rgb::new(10, 91, 211));
        assert_eq!(normalize("#0a5bd3"), Rgb::new(10, 91, 211));
        assert_eq!(normalize("  #ffffff "), Rgb::WHITE);
        assert_eq!(normalize("#fff"), Rgb::WHITE);
        assert_eq!(normalize("#1e2"), Rgb::new(0x11, 0xee, 0x22));
    }

    #[test]
    fn test_normalize_rgb_function() {
        assert_eq!(normalize("rgb(10, 91, 211)"), Rgb::new(10, 91, 211));
        assert_eq!(normalize("rgb(10,91,211)"), Rgb::new(10, 91, 211));
        assert_eq!(normalize("RGB( 1 , 2 , 3 )"), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_normalize_rgba_is_black() {
        assert_eq!(normalize("rgba(10,91,211,.08)"), Rgb::BLACK);
        assert_eq!(normalize("RGBA(255, 255, 255, 0.06)"), Rgb::BLACK);
        // The strict parser still reads the color
        assert_eq!(parse_color("rgba(10,91,211,.08)").unwrap().rgb, Rgb::new(10, 91, 211));
    }

    #[test]
    fn test_normalize_long_hex_keeps_first_six_digits() {
        assert_eq!(normalize("#0A5BD3FF"), Rgb::new(10, 91, 211));
        assert_eq!(normalize("#0a5bd380"), Rgb::new(10, 91, 211));
        assert_eq!(normalize("#0A5BD3F"), Rgb::new(10, 91, 211));
        assert_eq!(normalize("#0A5BZ3FF"), Rgb::BLACK);
        assert_eq!(parse_color("#0A5BD3FF"), Err(ColorParseError::InvalidLength(8)));
    }

    #[test]
    fn test_normalize_defaults_to_black() {
        assert_eq!(normalize("notacolor"), Rgb::BLACK);
        assert_eq!(normalize(""), Rgb::BLACK);
        assert_eq!(normalize("#12345"), Rgb::BLACK);
        assert_eq!(normalize("#gggggg"), Rgb::BLACK);
        assert_eq!(normalize("rgb(1, 2)"), Rgb::BLACK);
        assert_eq!(normalize("hsl(0, 0%, 100%)"), Rgb::BLACK);
    }

    #[test]
    fn test_normalize_saturates_out_of_range_channels() {
        assert_eq!(normalize("rgb(300, 0, 99999999999)"), Rgb::new(255, 0, 255));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(10, 91, 211).to_hex(), "#0a5bd3");
        assert_eq!(Rgb::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_parse_color_strict() {
        let value = parse_color("rgba(107,164,255,.12)").unwrap();
        assert_eq!(value.rgb, Rgb::new(107, 164, 255));
        assert!((value.alpha - 0.12).abs() < f32::EPSILON);
        assert!(!value.is_opaque());

        let value: ColorValue = "#EAF2FF".parse().unwrap();
        assert_eq!(value.rgb, Rgb::new(0xea, 0xf2, 0xff));
        assert!(value.is_opaque());
    }

    #[test]
    fn test_parse_color_errors() {
        assert_eq!(parse_color("  "), Err(ColorParseError::Empty));
        assert_eq!(parse_color("#12345"), Err(ColorParseError::InvalidLength(5)));
        assert!(matches!(parse_color("#zzzzzz"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(parse_color("blue"), Err(ColorParseError::InvalidFunc(_))));
        assert!(matches!(
            parse_color("rgb(256, 0, 0)"),
            Err(ColorParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_color("rgba(0, 0, 0, 1.5)"),
            Err(ColorParseError::OutOfRange(_))
        ));
    }
}
