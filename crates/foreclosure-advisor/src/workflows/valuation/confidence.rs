use super::domain::{Confidence, PropertyCondition, ValuationRange};
use super::engine::round_half_up;

const RANGE_LOW_FACTOR: f64 = 0.80;
const RANGE_HIGH_FACTOR: f64 = 1.20;

const HIGH_CONFIDENCE_MIN_SQ_FT: f64 = 1_000.0;
const HIGH_CONFIDENCE_MAX_SQ_FT: f64 = 5_000.0;
const LOW_CONFIDENCE_BELOW_SQ_FT: f64 = 800.0;
const LOW_CONFIDENCE_ABOVE_SQ_FT: f64 = 6_000.0;

/// Input-quality signals feeding the confidence label.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ConfidenceSignals {
    pub zip_code_found: bool,
    pub condition: PropertyCondition,
    pub square_feet: f64,
}

/// `high` and `low` are tested independently. Inputs matching neither land in `medium`,
/// which is only reachable for 800..1000 or 5000..=6000 sq ft with otherwise good signals.
pub(crate) fn classify(signals: &ConfidenceSignals) -> Confidence {
    let not_poor = signals.condition != PropertyCondition::Poor;

    let high = signals.zip_code_found
        && not_poor
        && signals.square_feet >= HIGH_CONFIDENCE_MIN_SQ_FT
        && signals.square_feet <= HIGH_CONFIDENCE_MAX_SQ_FT;
    if high {
        return Confidence::High;
    }

    let low = !signals.zip_code_found
        || !not_poor
        || signals.square_feet < LOW_CONFIDENCE_BELOW_SQ_FT
        || signals.square_feet > LOW_CONFIDENCE_ABOVE_SQ_FT;
    if low {
        return Confidence::Low;
    }

    Confidence::Medium
}

pub(crate) fn valuation_range(estimated_value: i64) -> ValuationRange {
    let mid = estimated_value as f64;
    ValuationRange {
        low: round_half_up(mid * RANGE_LOW_FACTOR),
        mid: estimated_value,
        high: round_half_up(mid * RANGE_HIGH_FACTOR),
    }
}
