// ABOUTME: Computed-style query abstraction used by the accessibility self-check
// ABOUTME: Resolves custom properties from a theme or from a parsed stylesheet

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::theme::Theme;
use crate::tokens::{ColorRole, Mode};

static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern is valid"));

static RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^{}]+)\{([^{}]*)\}").expect("rule pattern is valid"));

/// Anything that can resolve a CSS custom property to its effective value.
pub trait StyleSource {
    /// Effective value of `property` (e.g. `--gp-ink`), or `None` when unset.
    fn property_value(&self, property: &str) -> Option<String>;
}

impl StyleSource for Theme {
    fn property_value(&self, property: &str) -> Option<String> {
        ColorRole::from_css_property(property).map(|role| self.value(role).to_string())
    }
}

impl<S: StyleSource + ?Sized> StyleSource for &S {
    fn property_value(&self, property: &str) -> Option<String> {
        (**self).property_value(property)
    }
}

/// Custom properties as a browser would compute them on the root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyles {
    mode: Mode,
    properties: HashMap<String, String>,
}

impl ComputedStyles {
    /// Collect custom properties from `:root` rules, then from `.dark`
    /// rules when `mode` is dark, in document order.
    pub fn from_stylesheet(css: &str, mode: Mode) -> Self {
        let css = COMMENT.replace_all(css, "");
        let mut properties = HashMap::new();

        for rule in RULE.captures_iter(&css) {
            let applies = rule[1].split(',').map(str::trim).any(|selector| {
                selector == ":root" || (mode.is_dark() && selector == ".dark")
            });
            if !applies {
                continue;
            }

            for declaration in rule[2].split(';') {
                let Some((name, value)) = declaration.split_once(':') else {
                    continue;
                };
                let name = name.trim();
                if name.starts_with("--") {
                    properties.insert(name.to_string(), value.trim().to_string());
                }
            }
        }

        gamaprofit_logging::debug!(
            mode = %mode,
            properties = properties.len(),
            "Computed custom properties from stylesheet"
        );

        Self { mode, properties }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl StyleSource for ComputedStyles {
    fn property_value(&self, property: &str) -> Option<String> {
        self.properties.get(property.trim()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r#"
        :root {
            --gp-primary: #0A5BD3;        /* cobalt */
            --gp-ink: #0D1B2A;
            --gp-accent:   ;
        }
        .dark {
            --gp-primary: #6BA4FF;
        }
        .gp-ink { color: var(--gp-ink); }
    "#;

    #[test]
    fn test_theme_as_style_source() {
        let theme = Theme::light();
        assert_eq!(
            theme.property_value("--gp-muted").as_deref(),
            Some("#6B7280")
        );
        assert_eq!(theme.property_value("--gp-unknown"), None);
        assert_eq!(theme.property_value("muted"), None);
    }

    #[test]
    fn test_light_mode_reads_root_only() {
        let styles = ComputedStyles::from_stylesheet(SHEET, Mode::Light);
        assert_eq!(styles.property_value("--gp-primary").as_deref(), Some("#0A5BD3"));
        assert_eq!(styles.property_value("--gp-ink").as_deref(), Some("#0D1B2A"));
        assert_eq!(styles.len(), 3);
    }

    #[test]
    fn test_dark_mode_overrides_root() {
        let styles = ComputedStyles::from_stylesheet(SHEET, Mode::Dark);
        assert_eq!(styles.mode(), Mode::Dark);
        assert_eq!(styles.property_value("--gp-primary").as_deref(), Some("#6BA4FF"));
        // Not overridden, inherited from :root
        assert_eq!(styles.property_value("--gp-ink").as_deref(), Some("#0D1B2A"));
    }

    #[test]
    fn test_blank_declaration_is_kept_empty() {
        let styles = ComputedStyles::from_stylesheet(SHEET, Mode::Light);
        assert_eq!(styles.property_value("--gp-accent").as_deref(), Some(""));
    }

    #[test]
    fn test_comments_and_other_rules_ignored() {
        let styles = ComputedStyles::from_stylesheet(
            "/* :root { --gp-grid: red; } */ .gp-card { --gp-border: blue; }",
            Mode::Dark,
        );
        assert!(styles.is_empty());
    }

    #[test]
    fn test_selector_lists() {
        let styles =
            ComputedStyles::from_stylesheet("html, :root { --gp-muted: #6B7280 }", Mode::Light);
        assert_eq!(styles.property_value("--gp-muted").as_deref(), Some("#6B7280"));
    }
}
