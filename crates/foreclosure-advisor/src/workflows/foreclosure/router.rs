use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::domain::ForeclosureTimeline;
use super::timeline::calculate_foreclosure_timeline;
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRequest {
    pub first_missed_payment: NaiveDate,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing the foreclosure timeline endpoint.
pub fn foreclosure_router() -> Router {
    Router::new().route("/api/v1/foreclosure/timeline", post(timeline_handler))
}

pub(crate) async fn timeline_handler(
    payload: Result<Json<TimelineRequest>, JsonRejection>,
) -> Result<Json<ForeclosureTimeline>, AppError> {
    let Json(request) = payload?;
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    Ok(Json(calculate_foreclosure_timeline(
        request.first_missed_payment,
        today,
    )))
}
