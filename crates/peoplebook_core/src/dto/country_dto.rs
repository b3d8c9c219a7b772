//! Country request/response shapes.

use crate::model::country::{Country, CountryId};
use serde::{Deserialize, Serialize};

/// Input for adding a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryAddRequest {
    pub country_name: Option<String>,
}

impl CountryAddRequest {
    pub fn new(country_name: impl Into<String>) -> Self {
        Self {
            country_name: Some(country_name.into()),
        }
    }
}

/// Country shape returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResponse {
    pub country_id: CountryId,
    pub country_name: String,
}

impl From<&Country> for CountryResponse {
    fn from(country: &Country) -> Self {
        Self {
            country_id: country.country_id,
            country_name: country.country_name.clone(),
        }
    }
}
