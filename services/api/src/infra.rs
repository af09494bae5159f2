use chrono::NaiveDate;
use foreclosure_advisor::config::ValuationConfig;
use foreclosure_advisor::error::AppError;
use foreclosure_advisor::workflows::valuation::{AdjustmentTables, PriceTable, ValuationEngine};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the valuation engine, swapping in a CSV price table when one is configured.
pub(crate) fn build_engine(config: &ValuationConfig) -> Result<ValuationEngine, AppError> {
    engine_from_table(config.price_table.as_deref())
}

pub(crate) fn engine_from_table(path: Option<&Path>) -> Result<ValuationEngine, AppError> {
    match path {
        Some(path) => {
            let prices = PriceTable::from_path(path)?;
            info!(
                path = %path.display(),
                zip_codes = prices.len(),
                default_rate = prices.default_rate(),
                "loaded price table"
            );
            Ok(ValuationEngine::new(prices, AdjustmentTables::standard()))
        }
        None => Ok(ValuationEngine::standard()),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
