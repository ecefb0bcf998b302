// ABOUTME: Renders the global stylesheet carrying both token sets and utility classes
// ABOUTME: Light tokens live on :root, dark overrides on the .dark root class

use std::fmt::{self, Write};

use crate::tokens::{ColorRole, TokenSet};

/// Token-bound utility classes shared by every page section
const UTILITY_CLASSES: &[(&str, &str)] = &[
    (
        ".gp-btn-primary",
        "background: var(--gp-primary); color: #fff;",
    ),
    (".gp-btn-primary:hover", "filter: brightness(0.95);"),
    (".gp-brand", "background: var(--gp-primary); color: #fff;"),
    (
        ".gp-chip",
        "background: var(--gp-surface); border: 1px solid var(--gp-border); color: var(--gp-ink);",
    ),
    (".gp-card", "border-color: var(--gp-border);"),
    (".gp-ink", "color: var(--gp-ink);"),
    (".gp-kpi", "font-variant-numeric: tabular-nums;"),
    (
        ".gp-gradient-bar",
        "background: linear-gradient(90deg, var(--gp-tint-1), var(--gp-tint-2));",
    ),
    (
        ".gp-hero-bubble",
        "background: radial-gradient(ellipse at center, rgba(10,91,211,0.18), transparent 60%);",
    ),
    (
        ".gp-grid-spot",
        "background-image: \
         repeating-linear-gradient(0deg, var(--gp-grid), var(--gp-grid) 1px, transparent 1px, transparent 24px), \
         repeating-linear-gradient(90deg, var(--gp-grid), var(--gp-grid) 1px, transparent 1px, transparent 24px);",
    ),
];

/// The global stylesheet for a light/dark token pair, written on display.
#[derive(Debug, Clone, Copy)]
pub struct Stylesheet<'a> {
    pub light: &'a TokenSet,
    pub dark: &'a TokenSet,
}

impl fmt::Display for Stylesheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_token_block(f, ":root", self.light)?;
        writeln!(f)?;
        write_token_block(f, ".dark", self.dark)?;

        for (selector, body) in UTILITY_CLASSES {
            writeln!(f, "\n{selector} {{ {body} }}")?;
        }
        Ok(())
    }
}

/// Render the global stylesheet for a light/dark token pair.
pub fn render_stylesheet(light: &TokenSet, dark: &TokenSet) -> String {
    Stylesheet { light, dark }.to_string()
}

/// Utility class names, without the leading dot
pub fn utility_classes() -> impl Iterator<Item = &'static str> {
    UTILITY_CLASSES
        .iter()
        .map(|(selector, _)| selector.trim_start_matches('.'))
        .filter(|name| !name.contains(':'))
}

fn write_token_block(f: &mut impl fmt::Write, selector: &str, tokens: &TokenSet) -> fmt::Result {
    writeln!(f, "{selector} {{")?;
    for role in ColorRole::ALL {
        writeln!(f, "  {}: {};", role.css_property(), tokens.get(role))?;
    }
    f.write_str("}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_source::{ComputedStyles, StyleSource};
    use crate::theme::Theme;
    use crate::tokens::Mode;

    fn stylesheet() -> String {
        render_stylesheet(&TokenSet::light(), &TokenSet::dark())
    }

    #[test]
    fn test_stylesheet_writes_into_any_formatter() {
        let mut out = String::from("/* site */\n");
        let sheet = Stylesheet {
            light: &TokenSet::light(),
            dark: &TokenSet::dark(),
        };
        write!(out, "{sheet}").unwrap();
        assert_eq!(out.strip_prefix("/* site */\n"), Some(stylesheet().as_str()));
    }

    #[test]
    fn test_root_block_comes_before_dark_block() {
        let css = stylesheet();
        let root = css.find(":root {").unwrap();
        let dark = css.find(".dark {").unwrap();
        assert!(root < dark);
        assert!(css.contains("  --gp-primary: #0A5BD3;\n"));
        assert!(css.contains("  --gp-primary: #6BA4FF;\n"));
    }

    #[test]
    fn test_computed_styles_match_theme() {
        let css = stylesheet();
        for mode in Mode::ALL {
            let computed = ComputedStyles::from_stylesheet(&css, mode);
            let theme = Theme::new(mode);
            assert_eq!(computed.len(), ColorRole::ALL.len());
            for role in ColorRole::ALL {
                assert_eq!(
                    computed.property_value(role.css_property()),
                    theme.property_value(role.css_property()),
                    "{mode} {role}"
                );
            }
        }
    }

    #[test]
    fn test_utility_classes_present() {
        let css = stylesheet();
        let names: Vec<_> = utility_classes().collect();
        assert_eq!(names.len(), 9);
        for name in names {
            assert!(css.contains(&format!(".{name} {{")), "missing .{name}");
        }
        assert!(css.contains(".gp-btn-primary:hover { filter: brightness(0.95); }"));
    }

    #[test]
    fn test_utility_classes_only_reference_known_tokens() {
        let css = stylesheet();
        for reference in css.split("var(").skip(1) {
            let property = reference.split(')').next().unwrap();
            assert!(
                ColorRole::from_css_property(property).is_some(),
                "unknown token {property}"
            );
        }
    }
}
