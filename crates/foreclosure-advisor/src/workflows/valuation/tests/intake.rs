use super::common::*;
use crate::workflows::valuation::{
    PropertyCondition, PropertyDetails, PropertyType, ValuationError, ValuationRequest,
};

#[test]
fn well_formed_request_converts_to_details() {
    let details = PropertyDetails::try_from(uptown_request()).expect("request is valid");
    assert_eq!(details, uptown_home());
}

#[test]
fn unknown_property_type_is_rejected_not_propagated() {
    let request = ValuationRequest {
        property_type: "castle".to_string(),
        ..uptown_request()
    };

    let err = PropertyDetails::try_from(request).expect_err("type must be known");
    assert_eq!(
        err,
        ValuationError::InvalidInput {
            field: "propertyType",
            value: "castle".to_string(),
        }
    );
}

#[test]
fn unknown_condition_is_rejected() {
    let request = ValuationRequest {
        condition: "needs_love".to_string(),
        ..uptown_request()
    };

    match PropertyDetails::try_from(request) {
        Err(ValuationError::InvalidInput { field, value }) => {
            assert_eq!(field, "condition");
            assert_eq!(value, "needs_love");
        }
        other => panic!("expected invalid condition, got {other:?}"),
    }
}

#[test]
fn typed_details_deserialize_from_form_json() {
    let payload = r#"{
        "zipCode": "75215",
        "propertyType": "multi_family",
        "squareFeet": 2400,
        "bedrooms": 5,
        "bathrooms": 3,
        "condition": "fair"
    }"#;

    let details: PropertyDetails = serde_json::from_str(payload).expect("valid json");
    assert_eq!(details.property_type, PropertyType::MultiFamily);
    assert_eq!(details.condition, PropertyCondition::Fair);
    assert_eq!(details.square_feet, 2_400.0);
}

#[test]
fn typed_details_refuse_out_of_enum_values() {
    let payload = r#"{
        "zipCode": "75215",
        "propertyType": "duplex",
        "squareFeet": 2400,
        "bedrooms": 5,
        "bathrooms": 3,
        "condition": "fair"
    }"#;

    assert!(serde_json::from_str::<PropertyDetails>(payload).is_err());
}
