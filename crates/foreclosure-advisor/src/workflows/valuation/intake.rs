use serde::{Deserialize, Serialize};

use super::domain::{PropertyDetails, ValuationError};

/// Untrusted payload from the valuation form. Enum fields stay as raw strings until checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequest {
    pub zip_code: String,
    pub property_type: String,
    pub square_feet: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub condition: String,
}

impl TryFrom<ValuationRequest> for PropertyDetails {
    type Error = ValuationError;

    fn try_from(request: ValuationRequest) -> Result<Self, Self::Error> {
        let property_type = request.property_type.parse()?;
        let condition = request.condition.parse()?;

        Ok(PropertyDetails {
            zip_code: request.zip_code,
            property_type,
            square_feet: request.square_feet,
            bedrooms: request.bedrooms,
            bathrooms: request.bathrooms,
            condition,
        })
    }
}

impl From<PropertyDetails> for ValuationRequest {
    fn from(details: PropertyDetails) -> Self {
        Self {
            zip_code: details.zip_code,
            property_type: details.property_type.key().to_string(),
            square_feet: details.square_feet,
            bedrooms: details.bedrooms,
            bathrooms: details.bathrooms,
            condition: details.condition.key().to_string(),
        }
    }
}
