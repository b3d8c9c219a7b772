//! Person request/response shapes.
//!
//! # Invariants
//! - `age` is derived from `date_of_birth` at response time, never stored.
//! - Update requests replace every mutable field, absent values included.

use crate::model::country::CountryId;
use crate::model::person::{Gender, Person, PersonId};
use crate::validation::{FieldRule, FieldRules, ModelRules};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const DAYS_PER_YEAR: f64 = 365.25;

const PERSON_ID_REQUIRED: &str = "Person ID cannot be blank";
const PERSON_NAME_REQUIRED: &str = "PersonName cannot be blank";
const EMAIL_REQUIRED: &str = "Email cannot be blank";
const EMAIL_INVALID: &str = "Email value should be a valid email";

/// Input for adding a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAddRequest {
    pub person_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    pub receive_news_letter: Option<bool>,
}

impl PersonAddRequest {
    /// Builds a new stored record with a freshly generated id.
    pub fn to_person(&self) -> Person {
        let mut person = Person::new();
        person.person_name = self.person_name.clone();
        person.email = self.email.clone();
        person.date_of_birth = self.date_of_birth;
        person.gender = self.gender.map(|gender| gender.as_str().to_string());
        person.country_id = self.country_id;
        person.address = self.address.clone();
        person.receive_news_letter = self.receive_news_letter;
        person
    }
}

impl ModelRules for PersonAddRequest {
    fn field_rules(&self) -> Vec<FieldRules<'_>> {
        vec![
            FieldRules::text("person_name", self.person_name.as_deref())
                .rule(FieldRule::Required, PERSON_NAME_REQUIRED),
            FieldRules::text("email", self.email.as_deref())
                .rule(FieldRule::Required, EMAIL_REQUIRED)
                .rule(FieldRule::EmailAddress, EMAIL_INVALID),
        ]
    }
}

/// Input for replacing the mutable fields of an existing person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonUpdateRequest {
    pub person_id: PersonId,
    pub person_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    pub receive_news_letter: Option<bool>,
}

impl PersonUpdateRequest {
    /// Overwrites every mutable field of `person`. The id is left untouched.
    pub fn apply_to(&self, person: &mut Person) {
        person.person_name = self.person_name.clone();
        person.email = self.email.clone();
        person.date_of_birth = self.date_of_birth;
        person.gender = self.gender.map(|gender| gender.as_str().to_string());
        person.country_id = self.country_id;
        person.address = self.address.clone();
        person.receive_news_letter = self.receive_news_letter;
    }
}

impl ModelRules for PersonUpdateRequest {
    fn field_rules(&self) -> Vec<FieldRules<'_>> {
        vec![
            FieldRules::id("person_id", Some(self.person_id))
                .rule(FieldRule::Required, PERSON_ID_REQUIRED),
            FieldRules::text("person_name", self.person_name.as_deref())
                .rule(FieldRule::Required, PERSON_NAME_REQUIRED),
            FieldRules::text("email", self.email.as_deref())
                .rule(FieldRule::Required, EMAIL_REQUIRED)
                .rule(FieldRule::EmailAddress, EMAIL_INVALID),
        ]
    }
}

/// Person shape returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonResponse {
    pub person_id: PersonId,
    pub person_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub country_id: Option<CountryId>,
    /// Resolved through the country lookup; `None` for dangling ids.
    pub country_name: Option<String>,
    pub address: Option<String>,
    pub receive_news_letter: Option<bool>,
    /// Whole years between `date_of_birth` and the response date.
    pub age: Option<i64>,
}

impl PersonResponse {
    /// Shapes a stored record, deriving `age` against `today`.
    pub fn from_person(person: &Person, country_name: Option<String>, today: NaiveDate) -> Self {
        Self {
            person_id: person.person_id,
            person_name: person.person_name.clone(),
            email: person.email.clone(),
            date_of_birth: person.date_of_birth,
            gender: person.gender.clone(),
            country_id: person.country_id,
            country_name,
            address: person.address.clone(),
            receive_news_letter: person.receive_news_letter,
            age: person
                .date_of_birth
                .map(|date_of_birth| age_in_years(date_of_birth, today)),
        }
    }

    /// Builds an update request carrying the same field values.
    ///
    /// Gender text that does not parse becomes `None`.
    pub fn to_update_request(&self) -> PersonUpdateRequest {
        PersonUpdateRequest {
            person_id: self.person_id,
            person_name: self.person_name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.as_deref().and_then(Gender::parse),
            country_id: self.country_id,
            address: self.address.clone(),
            receive_news_letter: self.receive_news_letter,
        }
    }
}

impl Display for PersonResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Person ID: {}, Person name: {}, Email: {}, Date of birth: {}, Gender: {}, \
             Country ID: {}, Country name: {}, Address: {}, Receive News Letter: {}",
            self.person_id,
            self.person_name.as_deref().unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
            self.date_of_birth
                .map(|date| date.format("%d %b %Y").to_string())
                .unwrap_or_default(),
            self.gender.as_deref().unwrap_or_default(),
            self.country_id.map(|id| id.to_string()).unwrap_or_default(),
            self.country_name.as_deref().unwrap_or_default(),
            self.address.as_deref().unwrap_or_default(),
            self.receive_news_letter
                .map(|flag| flag.to_string())
                .unwrap_or_default(),
        )
    }
}

/// Rounds the day distance to years (365.25 days each), ties to even.
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> i64 {
    let days = (today - date_of_birth).num_days() as f64;
    (days / DAYS_PER_YEAR).round_ties_even() as i64
}
