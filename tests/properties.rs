//! Property-based tests for the conversions, scoring, and round generation.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chromatch::prelude::*;

/// Generate any 8-bit color.
fn any_color() -> impl Strategy<Value = AdditiveColor> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| AdditiveColor::new(r, g, b))
}

/// Generate a profile that can always be satisfied: saturation and lightness both move.
fn usable_profile() -> impl Strategy<Value = DifficultyProfile> {
    (1usize..=10, 0.0f64..60.0, 1.0f64..30.0, 1.0f64..30.0)
        .prop_map(|(n, h, s, l)| DifficultyProfile::new(n, h, s, l))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_hex_roundtrip(c in any_color()) {
        let hex = format_hex(c);
        prop_assert_eq!(hex.len(), 7);
        prop_assert_eq!(parse_hex(&hex), c);
        prop_assert_eq!(parse_hex(&hex.to_lowercase()), c);
        prop_assert_eq!(parse_hex(&hex[1..]), c);
    }

    #[test]
    fn prop_hue_roundtrip_within_one(c in any_color()) {
        let back = c.to_hue().to_additive();
        prop_assert!((i16::from(back.r) - i16::from(c.r)).abs() <= 1);
        prop_assert!((i16::from(back.g) - i16::from(c.g)).abs() <= 1);
        prop_assert!((i16::from(back.b) - i16::from(c.b)).abs() <= 1);
    }

    #[test]
    fn prop_hue_in_range(c in any_color()) {
        let hsl = c.to_hue();
        prop_assert!(hsl.h >= 0.0 && hsl.h < 360.0);
        prop_assert!(hsl.s >= 0.0 && hsl.s <= 100.0);
        prop_assert!(hsl.l >= 0.0 && hsl.l <= 100.0);
    }

    #[test]
    fn prop_bound_normalizes(h in -1000.0f64..1000.0, s in -50.0f64..150.0, l in -50.0f64..150.0) {
        let hsl = HueColor::clamp(HueColor::new(h, s, l));
        prop_assert!(hsl.h >= 0.0 && hsl.h < 360.0);
        prop_assert!(hsl.s >= 0.0 && hsl.s <= 100.0);
        prop_assert!(hsl.l >= 0.0 && hsl.l <= 100.0);
    }

    #[test]
    fn prop_malformed_hex_is_black(s in "[g-z ]{0,10}") {
        prop_assert_eq!(parse_hex(&s), AdditiveColor::BLACK);
        prop_assert!(try_parse_hex(&s).is_err());
    }

    #[test]
    fn prop_similarity_bounds_and_symmetry(a in any_color(), b in any_color()) {
        let ab = similarity(a, b);
        prop_assert!(ab >= 0.0 && ab <= 100.0);
        prop_assert_eq!(ab, similarity(b, a));
        // one decimal place
        prop_assert!(((ab * 10.0).round() - ab * 10.0).abs() < 1e-6);
    }

    #[test]
    fn prop_similarity_identity(c in any_color()) {
        prop_assert_eq!(similarity(c, c), 100.0);
    }

    #[test]
    fn prop_average_within_bounds(scores in prop::collection::vec(0.0f64..=100.0, 1..20)) {
        let avg = average_similarity(&scores);
        prop_assert!(avg >= 0.0 && avg <= 100.0);
    }

    #[test]
    fn prop_rounds_are_well_formed(c in any_color(), profile in usable_profile(), seed in any::<u64>()) {
        let reference = format_hex(c);
        let options = generate(&reference, &profile, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(options.len(), profile.candidate_count);
        let distinct: HashSet<&str> = options.iter().map(|o| o.hex.as_str()).collect();
        prop_assert_eq!(distinct.len(), profile.candidate_count);
        let correct: Vec<&ColorOption> = options.iter().filter(|o| o.is_correct).collect();
        prop_assert_eq!(correct.len(), 1);
        prop_assert_eq!(&correct[0].hex, &reference);
    }

    #[test]
    fn prop_any_valid_profile_returns(
        c in any_color(),
        n in 1usize..=8,
        h in 0.0f64..=f64::MAX,
        s in 0.0f64..=f64::MAX,
        l in 0.0f64..=f64::MAX,
        seed in any::<u64>(),
    ) {
        let profile = DifficultyProfile::new(n, h, s, l);
        match generate(&format_hex(c), &profile, &mut StdRng::seed_from_u64(seed)) {
            Ok(options) => prop_assert_eq!(options.len(), n),
            Err(e) => prop_assert!(
                matches!(e, VariationError::Unsatisfiable { .. }),
                "unexpected error {}",
                e
            ),
        }
    }

    #[test]
    fn prop_rounds_are_reproducible(c in any_color(), profile in usable_profile(), seed in any::<u64>()) {
        let reference = format_hex(c);
        let first = generate(&reference, &profile, &mut StdRng::seed_from_u64(seed));
        let second = generate(&reference, &profile, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }
}

#[test]
fn sample_scenarios() {
    assert_eq!(similarity(parse_hex("#D86762"), parse_hex("#D86762")), 100.0);
    assert_eq!(similarity(parse_hex("#000000"), parse_hex("#FFFFFF")), 0.0);
    assert_eq!(average_similarity(&[100.0, 80.0, 60.0]), 80.0);
    assert_eq!(average_similarity(&[]), 0.0);

    let profile = DifficultyProfile::new(4, 20.0, 15.0, 15.0);
    let options = generate("#5DA2E6", &profile, &mut StdRng::seed_from_u64(2)).unwrap();
    assert_eq!(options.len(), 4);
    assert_eq!(
        options.iter().filter(|o| o.is_correct).map(|o| o.hex.as_str()).collect::<Vec<_>>(),
        vec!["#5DA2E6"]
    );
}
