use super::domain::{PropertyCondition, PropertyDetails, PropertyType, ValuationBreakdown};
use super::engine::round_half_up;

/// Value multipliers per property type, relative to a single-family home.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyTypeMultipliers {
    pub single_family: f64,
    pub condo: f64,
    pub townhouse: f64,
    pub multi_family: f64,
}

impl PropertyTypeMultipliers {
    pub fn get(&self, property_type: PropertyType) -> f64 {
        match property_type {
            PropertyType::SingleFamily => self.single_family,
            PropertyType::Condo => self.condo,
            PropertyType::Townhouse => self.townhouse,
            PropertyType::MultiFamily => self.multi_family,
        }
    }
}

/// Value multipliers per condition, relative to a home in good condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionMultipliers {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
    pub poor: f64,
}

impl ConditionMultipliers {
    pub fn get(&self, condition: PropertyCondition) -> f64 {
        match condition {
            PropertyCondition::Excellent => self.excellent,
            PropertyCondition::Good => self.good,
            PropertyCondition::Fair => self.fair,
            PropertyCondition::Poor => self.poor,
        }
    }
}

/// Per-room value deltas measured from a baseline room count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomAdjustment {
    pub baseline: f64,
    pub value_per_room: f64,
}

impl RoomAdjustment {
    pub fn delta(&self, rooms: f64) -> f64 {
        (rooms - self.baseline) * self.value_per_room
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentTables {
    pub property_types: PropertyTypeMultipliers,
    pub conditions: ConditionMultipliers,
    pub bedrooms: RoomAdjustment,
    pub bathrooms: RoomAdjustment,
}

impl AdjustmentTables {
    pub const fn standard() -> Self {
        Self {
            property_types: PropertyTypeMultipliers {
                single_family: 1.00,
                condo: 0.85,
                townhouse: 0.90,
                multi_family: 0.95,
            },
            conditions: ConditionMultipliers {
                excellent: 1.15,
                good: 1.00,
                fair: 0.90,
                poor: 0.75,
            },
            bedrooms: RoomAdjustment {
                baseline: 3.0,
                value_per_room: 15_000.0,
            },
            bathrooms: RoomAdjustment {
                baseline: 2.0,
                value_per_room: 8_000.0,
            },
        }
    }
}

impl Default for AdjustmentTables {
    fn default() -> Self {
        Self::standard()
    }
}

/// Unrounded additive terms of an estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AdjustmentTerms {
    pub base_value: f64,
    pub type_adjustment: f64,
    pub condition_adjustment: f64,
    pub bedroom_adjustment: f64,
    pub bathroom_adjustment: f64,
}

impl AdjustmentTerms {
    pub fn sum(&self) -> f64 {
        self.base_value
            + self.type_adjustment
            + self.condition_adjustment
            + self.bedroom_adjustment
            + self.bathroom_adjustment
    }

    pub fn rounded(&self) -> ValuationBreakdown {
        ValuationBreakdown {
            base_value: round_half_up(self.base_value),
            type_adjustment: round_half_up(self.type_adjustment),
            condition_adjustment: round_half_up(self.condition_adjustment),
            bedroom_adjustment: round_half_up(self.bedroom_adjustment),
            bathroom_adjustment: round_half_up(self.bathroom_adjustment),
        }
    }
}

/// Type and condition are each a share of the unadjusted base value; they never compound.
pub(crate) fn apply_adjustments(
    details: &PropertyDetails,
    price_per_sq_ft: f64,
    tables: &AdjustmentTables,
) -> AdjustmentTerms {
    let base_value = details.square_feet * price_per_sq_ft;
    let type_adjustment = base_value * (tables.property_types.get(details.property_type) - 1.0);
    let condition_adjustment = base_value * (tables.conditions.get(details.condition) - 1.0);
    let bedroom_adjustment = tables.bedrooms.delta(details.bedrooms);
    let bathroom_adjustment = tables.bathrooms.delta(details.bathrooms);

    AdjustmentTerms {
        base_value,
        type_adjustment,
        condition_adjustment,
        bedroom_adjustment,
        bathroom_adjustment,
    }
}
