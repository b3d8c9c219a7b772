//! Core domain logic for the Peoplebook address book.
//! Countries and persons live in in-memory stores for the process lifetime.

pub mod clock;
pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dto::country_dto::{CountryAddRequest, CountryResponse};
pub use dto::person_dto::{age_in_years, PersonAddRequest, PersonResponse, PersonUpdateRequest};
pub use logging::{
    default_log_level, init_logging, init_logging_from_env, logging_status, LoggingError,
};
pub use model::country::{Country, CountryId};
pub use model::person::{Gender, Person, PersonId};
pub use repo::country_repo::{CountryRepository, InMemoryCountryRepository};
pub use repo::person_repo::{InMemoryPersonRepository, PersonRepository};
pub use repo::{RepoError, RepoResult};
pub use search::person_query::{
    filter_persons, sort_persons, sort_persons_by_property, PersonSearchField, PersonSortField,
    SortOrder,
};
pub use service::country_service::{CountryLookup, CountryService};
pub use service::error::{ServiceError, ServiceResult};
pub use service::person_service::PersonService;
pub use validation::{
    validate_model, FieldRule, FieldRules, ModelRules, RuleViolation, ValidationErrors,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
