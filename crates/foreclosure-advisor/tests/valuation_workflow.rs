use foreclosure_advisor::workflows::valuation::{
    calculate_property_value, Confidence, PriceTable, PropertyCondition, PropertyDetails,
    PropertyType, ValuationEngine, DEFAULT_PRICE_PER_SQ_FT,
};

fn details(zip_code: &str, square_feet: f64, condition: PropertyCondition) -> PropertyDetails {
    PropertyDetails {
        zip_code: zip_code.to_string(),
        property_type: PropertyType::SingleFamily,
        square_feet,
        bedrooms: 3.0,
        bathrooms: 2.0,
        condition,
    }
}

fn sample_inputs() -> Vec<PropertyDetails> {
    let mut inputs = Vec::new();
    for zip_code in ["75201", "75215", "76107", "99999", "abc"] {
        for property_type in PropertyType::ordered() {
            for condition in PropertyCondition::ordered() {
                for (square_feet, bedrooms, bathrooms) in [
                    (650.0, 1.0, 1.0),
                    (1_234.0, 2.0, 1.5),
                    (2_750.0, 4.0, 2.5),
                    (5_800.0, 6.0, 4.5),
                ] {
                    inputs.push(PropertyDetails {
                        zip_code: zip_code.to_string(),
                        property_type,
                        square_feet,
                        bedrooms,
                        bathrooms,
                        condition,
                    });
                }
            }
        }
    }
    inputs
}

#[test]
fn identical_inputs_produce_identical_results() {
    for input in sample_inputs() {
        assert_eq!(calculate_property_value(&input), calculate_property_value(&input));
    }
}

#[test]
fn range_is_ordered_for_positive_estimates() {
    for input in sample_inputs() {
        let result = calculate_property_value(&input);
        let range = result.valuation_range;
        let mid = result.estimated_value;

        assert_eq!(range.mid, mid);
        assert_eq!(range.low, (mid as f64 * 0.8).round() as i64);
        assert_eq!(range.high, (mid as f64 * 1.2).round() as i64);
        assert!(mid > 0, "{input:?}");
        assert!(range.low <= range.mid && range.mid <= range.high, "{input:?}");
    }
}

#[test]
fn negative_estimates_keep_fixed_factors_so_range_inverts() {
    let mut input = details("75201", 0.0, PropertyCondition::Good);
    input.bedrooms = 0.0;
    input.bathrooms = 0.0;

    let result = calculate_property_value(&input);
    let range = result.valuation_range;

    assert_eq!(result.estimated_value, -61_000);
    assert_eq!(range.low, -48_800);
    assert_eq!(range.mid, -61_000);
    assert_eq!(range.high, -73_200);
    assert!(range.low > range.mid && range.mid > range.high);
}

#[test]
fn breakdown_sums_to_estimate_within_rounding() {
    for input in sample_inputs() {
        let result = calculate_property_value(&input);
        let drift = (result.breakdown.total() - result.estimated_value).abs();
        assert!(drift <= 1, "breakdown drifted by {drift} for {input:?}");
    }
}

#[test]
fn unknown_zip_falls_back_to_default_rate() {
    let result = calculate_property_value(&details("99999", 2_000.0, PropertyCondition::Good));
    assert!(!result.zip_code_found);
    assert_eq!(result.price_per_sq_ft, DEFAULT_PRICE_PER_SQ_FT);
    assert_eq!(result.price_per_sq_ft, 185.0);
}

#[test]
fn known_zip_uses_table_rate() {
    let result = calculate_property_value(&details("75201", 2_000.0, PropertyCondition::Good));
    assert!(result.zip_code_found);
    assert_eq!(result.price_per_sq_ft, 350.0);
}

#[test]
fn confidence_labels_follow_input_quality() {
    let cases = [
        ("75201", 2_000.0, PropertyCondition::Good, Confidence::High),
        ("00000", 2_000.0, PropertyCondition::Good, Confidence::Low),
        ("75201", 2_000.0, PropertyCondition::Poor, Confidence::Low),
        ("75201", 900.0, PropertyCondition::Good, Confidence::Medium),
        ("75201", 5_500.0, PropertyCondition::Good, Confidence::Medium),
        ("75201", 700.0, PropertyCondition::Good, Confidence::Low),
        ("75201", 6_500.0, PropertyCondition::Excellent, Confidence::Low),
    ];

    for (zip_code, square_feet, condition, expected) in cases {
        let result = calculate_property_value(&details(zip_code, square_feet, condition));
        assert_eq!(
            result.confidence, expected,
            "zip {zip_code}, {square_feet} sq ft, {condition:?}"
        );
    }
}

#[test]
fn baseline_home_has_no_adjustments() {
    let result = calculate_property_value(&details("75205", 1_800.0, PropertyCondition::Good));

    assert_eq!(result.breakdown.type_adjustment, 0);
    assert_eq!(result.breakdown.condition_adjustment, 0);
    assert_eq!(result.breakdown.bedroom_adjustment, 0);
    assert_eq!(result.breakdown.bathroom_adjustment, 0);
    assert_eq!(result.estimated_value, result.breakdown.base_value);
}

#[test]
fn uptown_dallas_example_end_to_end() {
    let result = calculate_property_value(&PropertyDetails {
        zip_code: "75201".to_string(),
        property_type: PropertyType::SingleFamily,
        square_feet: 2_000.0,
        bedrooms: 4.0,
        bathrooms: 2.5,
        condition: PropertyCondition::Good,
    });

    assert_eq!(result.breakdown.base_value, 700_000);
    assert_eq!(result.breakdown.type_adjustment, 0);
    assert_eq!(result.breakdown.condition_adjustment, 0);
    assert_eq!(result.breakdown.bedroom_adjustment, 15_000);
    assert_eq!(result.breakdown.bathroom_adjustment, 4_000);
    assert_eq!(result.estimated_value, 719_000);
    assert_eq!(result.valuation_range.low, 575_200);
    assert_eq!(result.valuation_range.mid, 719_000);
    assert_eq!(result.valuation_range.high, 862_800);
}

#[test]
fn csv_price_table_can_replace_the_built_in_rates() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/zip_rates.csv");
    let engine = ValuationEngine::new(
        PriceTable::from_path(path).expect("sample table loads"),
        Default::default(),
    );

    let hit = engine.estimate(&details("75215", 1_000.0, PropertyCondition::Good));
    assert_eq!(hit.price_per_sq_ft, 150.0);
    assert_eq!(hit.estimated_value, 150_000);

    let miss = engine.estimate(&details("75201-0001", 1_000.0, PropertyCondition::Good));
    assert!(!miss.zip_code_found);
    assert_eq!(miss.price_per_sq_ft, 185.0);
}
