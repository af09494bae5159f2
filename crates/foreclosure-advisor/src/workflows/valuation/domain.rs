use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Structural category of the home being estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    SingleFamily,
    Condo,
    Townhouse,
    MultiFamily,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::SingleFamily,
            Self::Condo,
            Self::Townhouse,
            Self::MultiFamily,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::SingleFamily => "single_family",
            Self::Condo => "condo",
            Self::Townhouse => "townhouse",
            Self::MultiFamily => "multi_family",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleFamily => "Single Family",
            Self::Condo => "Condo",
            Self::Townhouse => "Townhouse",
            Self::MultiFamily => "Multi-Family",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PropertyType {
    type Err = ValuationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|candidate| candidate.key() == raw)
            .ok_or_else(|| ValuationError::InvalidInput {
                field: "propertyType",
                value: raw.to_string(),
            })
    }
}

/// Owner-reported condition of the home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl PropertyCondition {
    pub const fn ordered() -> [Self; 4] {
        [Self::Excellent, Self::Good, Self::Fair, Self::Poor]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for PropertyCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PropertyCondition {
    type Err = ValuationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|candidate| candidate.key() == raw)
            .ok_or_else(|| ValuationError::InvalidInput {
                field: "condition",
                value: raw.to_string(),
            })
    }
}

/// Caller-supplied facts about a home. Numbers are taken as given; no range checks happen here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub zip_code: String,
    pub property_type: PropertyType,
    pub square_feet: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub condition: PropertyCondition,
}

/// Qualitative reliability of an estimate, derived from input quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationRange {
    pub low: i64,
    pub mid: i64,
    pub high: i64,
}

/// Additive terms of an estimate, each rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationBreakdown {
    pub base_value: i64,
    pub type_adjustment: i64,
    pub condition_adjustment: i64,
    pub bedroom_adjustment: i64,
    pub bathroom_adjustment: i64,
}

impl ValuationBreakdown {
    pub fn total(&self) -> i64 {
        self.base_value
            + self.type_adjustment
            + self.condition_adjustment
            + self.bedroom_adjustment
            + self.bathroom_adjustment
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub estimated_value: i64,
    pub valuation_range: ValuationRange,
    pub price_per_sq_ft: f64,
    pub breakdown: ValuationBreakdown,
    pub confidence: Confidence,
    pub zip_code_found: bool,
}

/// Errors raised while turning untrusted input into `PropertyDetails`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValuationError {
    #[error("invalid {field}: '{value}' is not a recognized value")]
    InvalidInput { field: &'static str, value: String },
}
