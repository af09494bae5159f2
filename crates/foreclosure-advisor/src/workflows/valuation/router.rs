use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::warn;

use super::domain::{PropertyDetails, ValuationError, ValuationResult};
use super::engine::ValuationEngine;
use super::intake::ValuationRequest;
use crate::error::AppError;

/// Router builder exposing the valuation estimate endpoint.
pub fn valuation_router(engine: Arc<ValuationEngine>) -> Router {
    Router::new()
        .route("/api/v1/valuation", post(estimate_handler))
        .with_state(engine)
}

pub(crate) async fn estimate_handler(
    State(engine): State<Arc<ValuationEngine>>,
    payload: Result<Json<ValuationRequest>, JsonRejection>,
) -> Result<Json<ValuationResult>, AppError> {
    let Json(request) = payload?;
    let details = PropertyDetails::try_from(request).map_err(|error| {
        let ValuationError::InvalidInput { field, value } = &error;
        warn!(field, value = %value, "rejected valuation request");
        error
    })?;

    Ok(Json(engine.estimate(&details)))
}
