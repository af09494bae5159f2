use std::sync::OnceLock;

use tracing::debug;

use super::adjustments::{apply_adjustments, AdjustmentTables};
use super::confidence::{classify, valuation_range, ConfidenceSignals};
use super::domain::{PropertyDetails, ValuationResult};
use super::pricing::PriceTable;

/// Stateless estimator over read-only price and adjustment tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationEngine {
    prices: PriceTable,
    adjustments: AdjustmentTables,
}

impl ValuationEngine {
    pub fn new(prices: PriceTable, adjustments: AdjustmentTables) -> Self {
        Self {
            prices,
            adjustments,
        }
    }

    pub fn standard() -> Self {
        Self::new(PriceTable::standard(), AdjustmentTables::standard())
    }

    /// Process-wide engine over the built-in tables.
    pub fn shared() -> &'static ValuationEngine {
        static SHARED: OnceLock<ValuationEngine> = OnceLock::new();
        SHARED.get_or_init(Self::standard)
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn adjustments(&self) -> &AdjustmentTables {
        &self.adjustments
    }

    /// Never fails. Degenerate numbers (zero or negative footage) yield degenerate estimates.
    pub fn estimate(&self, details: &PropertyDetails) -> ValuationResult {
        let rate = self.prices.lookup(&details.zip_code);
        let terms = apply_adjustments(details, rate.price_per_sq_ft, &self.adjustments);

        let estimated_value = round_half_up(terms.sum());
        let confidence = classify(&ConfidenceSignals {
            zip_code_found: rate.zip_code_found,
            condition: details.condition,
            square_feet: details.square_feet,
        });

        debug!(
            zip_code = %details.zip_code,
            zip_code_found = rate.zip_code_found,
            property_type = %details.property_type,
            condition = %details.condition,
            estimated_value,
            confidence = confidence.label(),
            "property valuation estimated"
        );

        ValuationResult {
            estimated_value,
            valuation_range: valuation_range(estimated_value),
            price_per_sq_ft: rate.price_per_sq_ft,
            breakdown: terms.rounded(),
            confidence,
            zip_code_found: rate.zip_code_found,
        }
    }
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Estimate a property's value against the built-in tables.
pub fn calculate_property_value(details: &PropertyDetails) -> ValuationResult {
    ValuationEngine::shared().estimate(details)
}

/// Nearest integer, with exact halves rounded toward positive infinity (`-2.5 -> -2`).
pub(crate) fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded as i64
}
