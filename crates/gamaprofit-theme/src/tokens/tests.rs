// ABOUTME: Tests for the design token tables
// ABOUTME: Ensures both modes stay complete, parseable, and accessible

#[cfg(test)]
mod tests {
    use crate::color::{Rgb, normalize, parse_color};
    use crate::contrast::{ContrastRatios, contrast_ratio};
    use crate::tokens::{ColorRole, Mode, TokenSet};
    use std::collections::HashSet;

    #[test]
    fn test_every_role_present_in_both_modes() {
        let light: HashSet<_> = TokenSet::light().iter().map(|(role, _)| role).collect();
        let dark: HashSet<_> = TokenSet::dark().iter().map(|(role, _)| role).collect();

        assert_eq!(light.len(), ColorRole::ALL.len());
        assert_eq!(light, dark);
    }

    #[test]
    fn test_token_values_are_valid_colors() {
        for mode in Mode::ALL {
            for (role, value) in TokenSet::for_mode(mode).iter() {
                let parsed = parse_color(value);
                assert!(parsed.is_ok(), "{mode} {role} = {value:?}: {parsed:?}");
            }
        }
    }

    #[test]
    fn test_tint_roles_are_translucent() {
        for mode in Mode::ALL {
            let tokens = TokenSet::for_mode(mode);
            for role in [ColorRole::TintPrimary, ColorRole::TintAccent, ColorRole::Grid] {
                let value = parse_color(tokens.get(role)).unwrap();
                assert!(!value.is_opaque(), "{mode} {role} should be a tint");
            }
        }
    }

    #[test]
    fn test_light_mode_text_contrast() {
        let tokens = TokenSet::light();
        let white = normalize("#ffffff");

        assert!(contrast_ratio(normalize(tokens.ink), white) >= ContrastRatios::AA_NORMAL);
        assert!(contrast_ratio(white, normalize(tokens.primary)) >= ContrastRatios::AA_NORMAL);
    }

    #[test]
    fn test_dark_mode_text_on_surface() {
        let tokens = TokenSet::dark();
        let surface = normalize(tokens.surface);

        assert!(contrast_ratio(normalize(tokens.ink), surface) >= ContrastRatios::AAA_NORMAL);
        assert!(contrast_ratio(normalize(tokens.muted), surface) >= ContrastRatios::AA_NORMAL);
    }

    #[test]
    fn test_primary_tint_matches_primary_hue() {
        let rgb = |value: &str| parse_color(value).unwrap().rgb;
        let tokens = TokenSet::light();
        assert_eq!(rgb(tokens.tint_primary), rgb(tokens.primary));
        assert_eq!(rgb(tokens.tint_accent), rgb(tokens.accent));
        assert_eq!(rgb(tokens.grid), rgb(tokens.ink));
        assert_eq!(rgb(TokenSet::dark().grid), Rgb::WHITE);
    }

    #[test]
    fn test_translucent_tokens_normalize_to_black() {
        for mode in Mode::ALL {
            let tokens = TokenSet::for_mode(mode);
            for role in [ColorRole::TintPrimary, ColorRole::TintAccent, ColorRole::Grid] {
                assert_eq!(normalize(tokens.get(role)), Rgb::BLACK, "{mode} {role}");
            }
        }
    }

    #[test]
    fn test_role_names_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(role.name().parse::<ColorRole>().unwrap(), role);
            assert_eq!(role.css_property().parse::<ColorRole>().unwrap(), role);
            assert_eq!(ColorRole::from_css_property(role.css_property()), Some(role));
        }
        assert!("--gp-unknown".parse::<ColorRole>().is_err());
        assert_eq!(ColorRole::Ink.var(), "var(--gp-ink)");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Light".parse::<Mode>().unwrap(), Mode::Light);
        assert_eq!("inverted".parse::<Mode>().unwrap(), Mode::Dark);
        assert!("sepia".parse::<Mode>().is_err());
        assert!(Mode::Dark.is_dark());
        assert_eq!(Mode::default(), Mode::Light);
    }
}
