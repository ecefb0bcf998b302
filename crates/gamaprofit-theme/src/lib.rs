// ABOUTME: Theme tokens, color contrast utilities, and the accessibility self-check
// ABOUTME: Everything the page needs to know about colors lives in this crate

pub mod color;
pub mod contrast;
pub mod error;
pub mod self_check;
pub mod style_source;
pub mod stylesheet;
pub mod theme;
pub mod tokens;

pub use color::{ColorParseError, ColorValue, Rgb, normalize, parse_color};
pub use contrast::{ContrastRatios, WcagLevel, contrast_ratio, relative_luminance};
pub use error::{Result, ThemeError};
pub use self_check::{
    AssertionFailure, ContrastRequirement, Paint, RuntimeMode, SelfCheck, SelfCheckReport,
    SelfCheckRunner,
};
pub use style_source::{ComputedStyles, StyleSource};
pub use stylesheet::{Stylesheet, render_stylesheet};
pub use theme::Theme;
pub use tokens::{ColorRole, Mode, TokenSet};
