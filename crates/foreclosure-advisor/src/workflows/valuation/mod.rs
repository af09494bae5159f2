//! Property valuation estimates for the "what is my home worth" funnel.
//!
//! The estimator is a pure function of `PropertyDetails` and two read-only tables: a ZIP code
//! price table and a set of adjustment multipliers. Untrusted input enters through
//! `ValuationRequest`, which rejects unknown property types and conditions up front.

mod adjustments;
mod confidence;
pub mod domain;
mod engine;
mod intake;
pub mod pricing;
pub mod router;

#[cfg(test)]
mod tests;

pub use adjustments::{
    AdjustmentTables, ConditionMultipliers, PropertyTypeMultipliers, RoomAdjustment,
};
pub use domain::{
    Confidence, PropertyCondition, PropertyDetails, PropertyType, ValuationBreakdown,
    ValuationError, ValuationRange, ValuationResult,
};
pub use engine::{calculate_property_value, ValuationEngine};
pub use intake::ValuationRequest;
pub use pricing::{PriceTable, PriceTableError, RateLookup, DEFAULT_PRICE_PER_SQ_FT};
pub use router::valuation_router;
