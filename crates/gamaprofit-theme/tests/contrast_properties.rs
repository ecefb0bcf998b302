// ABOUTME: Property tests for color normalization and WCAG contrast math
// ABOUTME: Also pins the accessibility guarantees of the shipped token sets

use gamaprofit_theme::{
    ColorRole, ContrastRatios, Mode, Rgb, TokenSet, contrast_ratio, normalize, relative_luminance,
};
use proptest::prelude::*;

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

proptest! {
    #[test]
    fn hex_round_trip(color in rgb_strategy(), upper in any::<bool>()) {
        let hex = if upper { color.to_hex().to_uppercase() } else { color.to_hex() };
        prop_assert_eq!(normalize(&hex), color);
    }

    #[test]
    fn rgb_function_round_trip(color in rgb_strategy()) {
        let css = format!("rgb({}, {}, {})", color.r, color.g, color.b);
        prop_assert_eq!(normalize(&css), color);
    }

    #[test]
    fn self_contrast_is_one(color in rgb_strategy()) {
        prop_assert!((contrast_ratio(color, color) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn contrast_is_symmetric(a in rgb_strategy(), b in rgb_strategy()) {
        prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn contrast_is_bounded(a in rgb_strategy(), b in rgb_strategy()) {
        let ratio = contrast_ratio(a, b);
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio {}", ratio);
    }

    #[test]
    fn luminance_is_bounded(color in rgb_strategy()) {
        let l = relative_luminance(color);
        prop_assert!((0.0..=1.0 + 1e-9).contains(&l));
    }

    #[test]
    fn contrast_grows_with_separation(levels in prop::array::uniform3(any::<u8>())) {
        let mut levels = levels;
        levels.sort_unstable();
        let [low, mid, high] = levels.map(|v| Rgb::new(v, v, v));

        prop_assert!(contrast_ratio(low, high) >= contrast_ratio(low, mid));
        prop_assert!(contrast_ratio(low, high) >= contrast_ratio(mid, high));
    }

    #[test]
    fn garbage_normalizes_to_black(s in "[g-z ]{1,12}") {
        prop_assert_eq!(normalize(&s), Rgb::BLACK);
    }
}

#[test]
fn notacolor_is_black() {
    assert_eq!(normalize("notacolor"), Rgb::BLACK);
    assert_eq!(normalize(""), Rgb::BLACK);
}

#[test]
fn cobalt_scenario() {
    let cobalt = normalize("rgb(10, 91, 211)");
    assert_eq!(cobalt, Rgb::new(10, 91, 211));
    assert!((relative_luminance(cobalt) - 0.1225).abs() < 1e-3);

    let ratio = contrast_ratio(Rgb::WHITE, cobalt);
    assert!((ratio - 6.087).abs() < 1e-2);
    assert!(ratio >= ContrastRatios::AA_NORMAL);
}

#[test]
fn standard_mode_meets_aa() {
    let light = TokenSet::light();
    let white = normalize("#ffffff");

    assert!(contrast_ratio(normalize(light.ink), white) >= ContrastRatios::AA_NORMAL);
    assert!(contrast_ratio(white, normalize(light.primary)) >= ContrastRatios::AA_NORMAL);
}

#[test]
fn switching_modes_drops_no_role() {
    for role in ColorRole::ALL {
        for mode in Mode::ALL {
            assert!(
                !TokenSet::for_mode(mode).get(role).trim().is_empty(),
                "{mode} lacks {role}"
            );
        }
    }
}
