//! Field-dispatched filtering and sorting of person responses.
//!
//! # Invariants
//! - Unknown field names never fail; callers get their input back unchanged.
//! - Text matching and text ordering ignore case.
//! - Records with an absent or empty target value pass every filter.
//! - Sorting is stable in both directions; absent values order first
//!   ascending and last descending.

use crate::dto::person_dto::PersonResponse;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Date rendering used for `DateOfBirth` search, e.g. `01 January 1860`.
pub const SEARCH_DATE_FORMAT: &str = "%d %B %Y";

/// Person properties that support text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonSearchField {
    PersonName,
    Email,
    DateOfBirth,
    /// Prefix match instead of substring match.
    Gender,
    /// Matches against the resolved country name.
    CountryId,
    Address,
}

impl PersonSearchField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersonName => "PersonName",
            Self::Email => "Email",
            Self::DateOfBirth => "DateOfBirth",
            Self::Gender => "Gender",
            Self::CountryId => "CountryId",
            Self::Address => "Address",
        }
    }

    /// Parses a property name. `Name` is accepted as alias of `PersonName`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PersonName" | "Name" => Some(Self::PersonName),
            "Email" => Some(Self::Email),
            "DateOfBirth" => Some(Self::DateOfBirth),
            "Gender" => Some(Self::Gender),
            "CountryId" => Some(Self::CountryId),
            "Address" => Some(Self::Address),
            _ => None,
        }
    }
}

/// Person properties that support ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonSortField {
    PersonName,
    Email,
    DateOfBirth,
    Age,
    Gender,
    CountryName,
    Address,
    ReceiveNewsLetter,
}

impl PersonSortField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersonName => "PersonName",
            Self::Email => "Email",
            Self::DateOfBirth => "DateOfBirth",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::CountryName => "CountryName",
            Self::Address => "Address",
            Self::ReceiveNewsLetter => "ReceiveNewsLetter",
        }
    }

    /// Parses a property name. `Name` is accepted as alias of `PersonName`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PersonName" | "Name" => Some(Self::PersonName),
            "Email" => Some(Self::Email),
            "DateOfBirth" => Some(Self::DateOfBirth),
            "Age" => Some(Self::Age),
            "Gender" => Some(Self::Gender),
            "CountryName" => Some(Self::CountryName),
            "Address" => Some(Self::Address),
            "ReceiveNewsLetter" => Some(Self::ReceiveNewsLetter),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Keeps persons whose `field` matches `search_text`.
///
/// Empty `search_text` keeps everything.
pub fn filter_persons(
    persons: Vec<PersonResponse>,
    field: PersonSearchField,
    search_text: &str,
) -> Vec<PersonResponse> {
    if search_text.is_empty() {
        return persons;
    }

    persons
        .into_iter()
        .filter(|person| matches_search(person, field, search_text))
        .collect()
}

/// Returns a sorted copy of `persons` ordered by `field`.
pub fn sort_persons(
    persons: &[PersonResponse],
    field: PersonSortField,
    order: SortOrder,
) -> Vec<PersonResponse> {
    let mut sorted = persons.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by(|a, b| compare_by_field(a, b, field)),
        SortOrder::Desc => sorted.sort_by(|a, b| compare_by_field(b, a, field)),
    }
    sorted
}

/// Sorts by a caller-supplied property name.
///
/// Empty or unknown names return `persons` unchanged.
pub fn sort_persons_by_property(
    persons: &[PersonResponse],
    sort_by: &str,
    order: SortOrder,
) -> Vec<PersonResponse> {
    match PersonSortField::parse(sort_by) {
        Some(field) => sort_persons(persons, field, order),
        None => persons.to_vec(),
    }
}

fn matches_search(person: &PersonResponse, field: PersonSearchField, search_text: &str) -> bool {
    match field {
        PersonSearchField::PersonName => text_contains(person.person_name.as_deref(), search_text),
        PersonSearchField::Email => text_contains(person.email.as_deref(), search_text),
        PersonSearchField::DateOfBirth => match person.date_of_birth {
            Some(date) => contains_ignore_case(
                &date.format(SEARCH_DATE_FORMAT).to_string(),
                search_text,
            ),
            None => true,
        },
        PersonSearchField::Gender => match person.gender.as_deref() {
            Some(gender) if !gender.is_empty() => {
                fold_case(gender).starts_with(&fold_case(search_text))
            }
            _ => true,
        },
        PersonSearchField::CountryId => text_contains(person.country_name.as_deref(), search_text),
        PersonSearchField::Address => text_contains(person.address.as_deref(), search_text),
    }
}

fn text_contains(value: Option<&str>, search_text: &str) -> bool {
    match value {
        Some(value) if !value.is_empty() => contains_ignore_case(value, search_text),
        _ => true,
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&fold_case(needle))
}

fn fold_case(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

/// Simple one-to-one uppercase mapping; chars that expand stay as they are.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => c,
    }
}

fn compare_by_field(a: &PersonResponse, b: &PersonResponse, field: PersonSortField) -> Ordering {
    match field {
        PersonSortField::PersonName => {
            compare_text(a.person_name.as_deref(), b.person_name.as_deref())
        }
        PersonSortField::Email => compare_text(a.email.as_deref(), b.email.as_deref()),
        PersonSortField::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
        PersonSortField::Age => a.age.cmp(&b.age),
        PersonSortField::Gender => compare_text(a.gender.as_deref(), b.gender.as_deref()),
        PersonSortField::CountryName => {
            compare_text(a.country_name.as_deref(), b.country_name.as_deref())
        }
        PersonSortField::Address => compare_text(a.address.as_deref(), b.address.as_deref()),
        PersonSortField::ReceiveNewsLetter => a.receive_news_letter.cmp(&b.receive_news_letter),
    }
}

fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.chars().map(fold_char).cmp(b.chars().map(fold_char)),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}
