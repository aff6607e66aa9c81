//! Property tests for conversion round-trips and derivation shape

use proptest::prelude::*;
use swatch_forge::constants::steps::{MAX_UI_STEPS, MIN_UI_STEPS};
use swatch_forge::{
    ColorConverter, HarmonyRule, Hsl, PaletteDeriver, Rgb, ShadeTintDeriver, StepNormalization,
};

fn any_rgb() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(Rgb::from)
}

fn any_rule() -> impl Strategy<Value = HarmonyRule> {
    prop::sample::select(HarmonyRule::ALL.to_vec())
}

fn any_normalization() -> impl Strategy<Value = StepNormalization> {
    prop_oneof![Just(StepNormalization::Even), Just(StepNormalization::Tenths)]
}

/// Angular distance between two hues, in degrees
fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

proptest! {
    #[test]
    fn hex_round_trip_is_exact(rgb in any_rgb(), upper in any::<bool>(), hash in any::<bool>()) {
        let converter = ColorConverter::new();
        let hex = rgb.to_hex();
        let mut input = if upper { hex.to_uppercase() } else { hex.clone() };
        if !hash {
            input.remove(0);
        }

        let parsed = converter.hex_to_rgb(&input).unwrap();
        prop_assert_eq!(parsed, rgb);
        prop_assert_eq!(
            converter.rgb_to_hex(parsed.r as f64, parsed.g as f64, parsed.b as f64),
            hex
        );
    }

    #[test]
    fn rgb_hsl_round_trip_within_one(rgb in any_rgb()) {
        let converter = ColorConverter::new();
        let back = converter.hsl_to_rgb(converter.rgb_to_hsl(rgb));

        for (a, b) in back.channels().into_iter().zip(rgb.channels()) {
            prop_assert!(a.abs_diff(b) <= 1, "{} vs {}", back, rgb);
        }
    }

    #[test]
    fn rgb_to_hsl_stays_in_range(rgb in any_rgb()) {
        let hsl = ColorConverter::new().rgb_to_hsl(rgb);
        prop_assert!((0.0..360.0).contains(&hsl.h));
        prop_assert!((0.0..=100.0).contains(&hsl.s));
        prop_assert!((0.0..=100.0).contains(&hsl.l));
    }

    #[test]
    fn hue_survives_round_trip(
        h in -720.0f64..720.0,
        s in 50.0f64..100.0,
        l in 25.0f64..75.0,
    ) {
        let converter = ColorConverter::new();
        let hsl = converter.rgb_to_hsl(converter.hsl_to_rgb(Hsl::new(h, s, l)));
        let wrapped = h.rem_euclid(360.0);
        prop_assert!(
            hue_distance(hsl.h, wrapped) < 2.0,
            "hue {} came back as {}", wrapped, hsl.h
        );
    }

    #[test]
    fn palette_always_has_base_first(rgb in any_rgb(), rule in any_rule()) {
        let palette = PaletteDeriver::new().derive(rgb, rule);
        prop_assert_eq!(palette.colors.len(), 5);
        prop_assert_eq!(palette.base(), rgb);
    }

    #[test]
    fn shade_tint_lengths_and_divergence(
        rgb in any_rgb(),
        steps in MIN_UI_STEPS..=MAX_UI_STEPS,
        normalization in any_normalization(),
    ) {
        let set = ShadeTintDeriver::with_normalization(normalization)
            .derive(rgb, steps)
            .unwrap();
        prop_assert_eq!(set.shades.len(), steps);
        prop_assert_eq!(set.tints.len(), steps);

        let (shades, tints) = set.divergence();
        prop_assert!(shades[0] <= shades[steps - 1]);
        prop_assert!(tints[0] <= tints[steps - 1]);

        // Per-channel movement is monotonic in the step index
        for w in set.shades.windows(2) {
            prop_assert!(w[0].r >= w[1].r && w[0].g >= w[1].g && w[0].b >= w[1].b);
        }
        for w in set.tints.windows(2) {
            prop_assert!(w[0].r <= w[1].r && w[0].g <= w[1].g && w[0].b <= w[1].b);
        }
    }
}
