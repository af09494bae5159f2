use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::valuation::{
    AdjustmentTables, PriceTable, PropertyCondition, PropertyDetails, PropertyType,
    ValuationEngine, ValuationRequest,
};

pub(super) fn uptown_home() -> PropertyDetails {
    PropertyDetails {
        zip_code: "75201".to_string(),
        property_type: PropertyType::SingleFamily,
        square_feet: 2_000.0,
        bedrooms: 4.0,
        bathrooms: 2.5,
        condition: PropertyCondition::Good,
    }
}

pub(super) fn baseline_home(zip_code: &str, square_feet: f64) -> PropertyDetails {
    PropertyDetails {
        zip_code: zip_code.to_string(),
        property_type: PropertyType::SingleFamily,
        square_feet,
        bedrooms: 3.0,
        bathrooms: 2.0,
        condition: PropertyCondition::Good,
    }
}

pub(super) fn uptown_request() -> ValuationRequest {
    ValuationRequest::from(uptown_home())
}

pub(super) fn engine() -> ValuationEngine {
    ValuationEngine::standard()
}

pub(super) fn shared_engine() -> Arc<ValuationEngine> {
    Arc::new(ValuationEngine::standard())
}

/// Two-ZIP table with round numbers for hand-checked arithmetic.
pub(super) fn small_market_engine() -> ValuationEngine {
    let mut rates = BTreeMap::new();
    rates.insert("50309".to_string(), 100.0);
    rates.insert("50310".to_string(), 120.0);
    ValuationEngine::new(PriceTable::new(rates, 90.0), AdjustmentTables::standard())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
