use proptest::prelude::*;
use proptest::test_runner::Config;
use spooltag_core::domain::spool::entities::{
    DEFAULT_BRAND, PROTOCOL, SpoolData, SpoolValidationError, VALID_BRANDS, VERSION,
    normalize_brand,
};

/// Positive `(min, max)` pairs with `min <= max`.
fn temperature_range() -> impl Strategy<Value = (i32, i32)> {
    (1_i32..=400).prop_flat_map(|min| (Just(min), min..=500))
}

fn flip_case(value: &str, mask: &[bool]) -> String {
    value
        .chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn valid_fields_are_kept_verbatim(
        filament_type in "[A-Za-z0-9+-]{1,12}",
        color_hex in "#[0-9a-fA-F]{6}",
        brand in "[A-Za-z]{1,12}",
        (min_temp, max_temp) in temperature_range(),
    ) {
        let spool = SpoolData::new(
            filament_type.clone(),
            color_hex.clone(),
            brand.clone(),
            min_temp,
            max_temp,
        );
        prop_assert!(spool.is_ok());
        let spool = spool.unwrap();

        prop_assert_eq!(spool.protocol.as_str(), PROTOCOL);
        prop_assert_eq!(spool.version.as_str(), VERSION);
        prop_assert_eq!(spool.filament_type, filament_type);
        prop_assert_eq!(spool.color_hex, color_hex);
        prop_assert_eq!(spool.brand, brand);
        prop_assert_eq!(spool.min_temp, min_temp);
        prop_assert_eq!(spool.max_temp, max_temp);
    }

    #[test]
    fn color_without_hash_is_rejected(
        digits in "[0-9a-fA-F]{6}",
        (min_temp, max_temp) in temperature_range(),
    ) {
        let result = SpoolData::new(
            "PLA".to_string(),
            digits.clone(),
            "eSun".to_string(),
            min_temp,
            max_temp,
        );
        prop_assert_eq!(result, Err(SpoolValidationError::InvalidColorHex(digits)));
    }

    #[test]
    fn color_with_wrong_length_is_rejected(
        color_hex in "#([0-9a-fA-F]{1,5}|[0-9a-fA-F]{7,10})",
        (min_temp, max_temp) in temperature_range(),
    ) {
        let result = SpoolData::new(
            "PLA".to_string(),
            color_hex.clone(),
            "eSun".to_string(),
            min_temp,
            max_temp,
        );
        prop_assert_eq!(result, Err(SpoolValidationError::InvalidColorHex(color_hex)));
    }

    #[test]
    fn empty_type_is_rejected(
        color_hex in "#[0-9a-fA-F]{6}",
        (min_temp, max_temp) in temperature_range(),
    ) {
        let result = SpoolData::new(
            String::new(),
            color_hex,
            "eSun".to_string(),
            min_temp,
            max_temp,
        );
        prop_assert_eq!(result, Err(SpoolValidationError::MissingType));
    }

    #[test]
    fn empty_brand_is_rejected(
        color_hex in "#[0-9a-fA-F]{6}",
        (min_temp, max_temp) in temperature_range(),
    ) {
        let result = SpoolData::new(
            "PETG".to_string(),
            color_hex,
            String::new(),
            min_temp,
            max_temp,
        );
        prop_assert_eq!(result, Err(SpoolValidationError::MissingBrand));
    }

    #[test]
    fn non_positive_min_temp_is_rejected(min_temp in -1000_i32..=0, max_temp in 1_i32..=500) {
        let result = SpoolData::new(
            "PLA".to_string(),
            "#FF5733".to_string(),
            "eSun".to_string(),
            min_temp,
            max_temp,
        );
        prop_assert_eq!(result, Err(SpoolValidationError::NonPositiveMinTemp));
    }

    #[test]
    fn non_positive_max_temp_is_rejected(min_temp in 1_i32..=500, max_temp in -1000_i32..=0) {
        let result = SpoolData::new(
            "PLA".to_string(),
            "#FF5733".to_string(),
            "eSun".to_string(),
            min_temp,
            max_temp,
        );
        prop_assert_eq!(result, Err(SpoolValidationError::NonPositiveMaxTemp));
    }

    #[test]
    fn min_above_max_is_rejected((max_temp, gap) in (1_i32..=400, 1_i32..=100)) {
        let min_temp = max_temp + gap;
        let result = SpoolData::new(
            "PLA".to_string(),
            "#FF5733".to_string(),
            "eSun".to_string(),
            min_temp,
            max_temp,
        );
        prop_assert_eq!(
            result,
            Err(SpoolValidationError::MinExceedsMax { min: min_temp, max: max_temp })
        );
    }

    #[test]
    fn normalize_brand_is_idempotent(brand in ".{0,16}") {
        let once = normalize_brand(&brand);
        prop_assert_eq!(normalize_brand(once), once);
        prop_assert!(VALID_BRANDS.contains(&once));
    }

    #[test]
    fn normalize_brand_ignores_case(
        brand in prop::sample::select(VALID_BRANDS.to_vec()),
        mask in prop::collection::vec(any::<bool>(), 1..12),
    ) {
        let spelled = flip_case(brand, &mask);
        prop_assert_eq!(normalize_brand(&spelled), brand);
    }

    #[test]
    fn unknown_brand_becomes_generic(brand in "[A-Za-z ]{0,16}") {
        prop_assume!(!VALID_BRANDS.iter().any(|known| known.eq_ignore_ascii_case(&brand)));
        prop_assert_eq!(normalize_brand(&brand), DEFAULT_BRAND);
    }
}
