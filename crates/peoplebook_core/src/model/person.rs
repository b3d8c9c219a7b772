//! Person domain model.
//!
//! # Responsibility
//! - Define the stored person record and the gender vocabulary.
//!
//! # Invariants
//! - `person_id` is generated once and is never replaced by updates.
//! - `gender` is kept in its textual form (`Gender::as_str`).
//! - `country_id` is a weak reference; it is never checked against the
//!   country store at write time.

use crate::model::country::CountryId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a stored person.
pub type PersonId = Uuid;

/// Gender options accepted by person requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Textual form used for storage and responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Parses the textual form, ignoring ASCII case and surrounding spaces.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical stored person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub person_id: PersonId,
    pub person_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    /// Textual gender (`Male|Female|Other`), `None` when not supplied.
    pub gender: Option<String>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    pub receive_news_letter: Option<bool>,
}

impl Person {
    /// Creates an empty person record with a freshly generated id.
    ///
    /// Callers fill the mutable fields from a validated request.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Creates an empty person record for a caller-provided id.
    pub fn with_id(person_id: PersonId) -> Self {
        Self {
            person_id,
            person_name: None,
            email: None,
            date_of_birth: None,
            gender: None,
            country_id: None,
            address: None,
            receive_news_letter: None,
        }
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::new()
    }
}
