// ABOUTME: Resolved theme value handed to every consumer of the token store
// ABOUTME: Built once per rendering context for a single mode, read-only afterwards

use crate::color::{Rgb, normalize, parse_color};
use crate::error::{Result, ThemeError};
use crate::tokens::{ColorRole, Mode, TokenSet};

/// The active token set together with the mode it was resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: Mode,
    pub tokens: TokenSet,
}

impl Theme {
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            tokens: TokenSet::for_mode(mode),
        }
    }

    pub const fn light() -> Self {
        Self::new(Mode::Light)
    }

    pub const fn dark() -> Self {
        Self::new(Mode::Dark)
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Raw token value for a role
    pub fn value(&self, role: ColorRole) -> &'static str {
        self.tokens.get(role)
    }

    /// Normalized color for a role
    pub fn color(&self, role: ColorRole) -> Rgb {
        normalize(self.value(role))
    }

    /// Look up a token by role name or custom property.
    ///
    /// Unknown names are an error; no fallback value is ever substituted.
    pub fn lookup(&self, name: &str) -> Result<&'static str> {
        let role = name.parse::<ColorRole>()?;
        Ok(self.value(role))
    }

    /// Strictly parse every token, reporting the first malformed one.
    pub fn validate(&self) -> Result<()> {
        for (role, value) in self.tokens.iter() {
            parse_color(value).map_err(|err| ThemeError::invalid_color(role.name(), err))?;
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_for_mode() {
        let theme = Theme::new(Mode::Dark);
        assert!(theme.is_dark());
        assert_eq!(theme.tokens, TokenSet::dark());
        assert_eq!(Theme::default().mode, Mode::Light);
    }

    #[test]
    fn test_color_resolution() {
        let theme = Theme::light();
        assert_eq!(theme.color(ColorRole::Primary), Rgb::new(10, 91, 211));
        assert_eq!(theme.value(ColorRole::Ink), "#0D1B2A");
    }

    #[test]
    fn test_lookup_known_roles() {
        let theme = Theme::dark();
        assert_eq!(theme.lookup("primary").unwrap(), "#6BA4FF");
        assert_eq!(theme.lookup("--gp-primary-600").unwrap(), "#4E85E0");
    }

    #[test]
    fn test_lookup_unknown_role_is_an_error() {
        assert_eq!(
            Theme::light().lookup("--gp-sparkle"),
            Err(ThemeError::UnknownRole("--gp-sparkle".to_string()))
        );
    }

    #[test]
    fn test_builtin_themes_validate() {
        assert!(Theme::light().validate().is_ok());
        assert!(Theme::dark().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_malformed_token() {
        let mut theme = Theme::light();
        theme.tokens.muted = "#6B728";
        let err = theme.validate().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { ref role, .. } if role == "muted"));
    }
}
