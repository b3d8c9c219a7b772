//! Country domain model.
//!
//! # Invariants
//! - `country_id` is generated once and never changes.
//! - `country_name` is unique across the country store (exact match).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a stored country.
pub type CountryId = Uuid;

/// Canonical stored country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub country_id: CountryId,
    pub country_name: String,
}

impl Country {
    /// Creates a country with a freshly generated id.
    pub fn new(country_name: impl Into<String>) -> Self {
        Self {
            country_id: Uuid::new_v4(),
            country_name: country_name.into(),
        }
    }
}
