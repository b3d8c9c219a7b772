//! Person use-case service.
//!
//! # Responsibility
//! - Validate and store persons, then shape them into responses.
//! - Resolve country names through the injected `CountryLookup`.
//! - Provide field-dispatched search and ordering entry points.
//!
//! # Invariants
//! - Every response path resolves `country_name` and derives `age`.
//! - Failed calls leave the person store unchanged.
//! - Updates replace every mutable field; the id never changes.

use crate::clock::{Clock, SystemClock};
use crate::dto::person_dto::{PersonAddRequest, PersonResponse, PersonUpdateRequest};
use crate::model::person::{Person, PersonId};
use crate::repo::person_repo::PersonRepository;
use crate::search::person_query::{
    filter_persons, sort_persons_by_property, PersonSearchField, SortOrder,
};
use crate::service::country_service::CountryLookup;
use crate::service::error::{ServiceError, ServiceResult};
use crate::validation::validate_model;
use log::{debug, info, warn};

/// Person service facade over a person store and a country lookup.
pub struct PersonService<R: PersonRepository, L: CountryLookup> {
    repo: R,
    countries: L,
    clock: Box<dyn Clock>,
}

impl<R: PersonRepository, L: CountryLookup> PersonService<R, L> {
    /// Creates a service that derives ages from the local date.
    pub fn new(repo: R, countries: L) -> Self {
        Self::with_clock(repo, countries, SystemClock)
    }

    /// Creates a service with an explicit date source.
    pub fn with_clock(repo: R, countries: L, clock: impl Clock + 'static) -> Self {
        Self {
            repo,
            countries,
            clock: Box::new(clock),
        }
    }

    /// Validates and stores one person.
    ///
    /// # Errors
    /// - `NullArgument` when `request` is absent.
    /// - `ValidationFailed` listing every failed field rule.
    pub fn add_person(&self, request: Option<&PersonAddRequest>) -> ServiceResult<PersonResponse> {
        let request = request.ok_or(ServiceError::NullArgument("person_add_request"))?;
        if let Err(errors) = validate_model(request) {
            warn!(
                "event=person_add module=person_service status=rejected violations={}",
                errors.violations().len()
            );
            return Err(errors.into());
        }

        let person = request.to_person();
        let response = self.to_response(&person);
        self.repo.insert_person(person)?;
        info!(
            "event=person_add module=person_service status=ok person_id={}",
            response.person_id
        );
        Ok(response)
    }

    /// Returns every person in insertion order.
    pub fn get_all_persons(&self) -> Vec<PersonResponse> {
        self.repo
            .list_persons()
            .iter()
            .map(|person| self.to_response(person))
            .collect()
    }

    /// Gets one person by id.
    ///
    /// # Errors
    /// - `NullArgument` when `person_id` is absent or the nil uuid.
    pub fn get_person_by_person_id(
        &self,
        person_id: Option<PersonId>,
    ) -> ServiceResult<Option<PersonResponse>> {
        let person_id = person_id
            .filter(|id| !id.is_nil())
            .ok_or(ServiceError::NullArgument("person_id"))?;

        Ok(self
            .repo
            .get_person(person_id)
            .map(|person| self.to_response(&person)))
    }

    /// Filters all persons by a caller-supplied property name and text.
    ///
    /// Absent/empty inputs and unknown property names return every person.
    pub fn get_filtered_persons(
        &self,
        search_by: Option<&str>,
        search_text: Option<&str>,
    ) -> Vec<PersonResponse> {
        let all_persons = self.get_all_persons();
        let (Some(search_by), Some(search_text)) = (search_by, search_text) else {
            return all_persons;
        };
        if search_by.is_empty() || search_text.is_empty() {
            return all_persons;
        }

        match PersonSearchField::parse(search_by) {
            Some(field) => {
                log_filter_matches(field, filter_persons(all_persons, field, search_text))
            }
            None => {
                debug!("event=person_filter module=person_service status=skipped reason=unknown_field");
                all_persons
            }
        }
    }

    /// Filters all persons by a typed search field.
    pub fn search_persons(&self, field: PersonSearchField, search_text: &str) -> Vec<PersonResponse> {
        log_filter_matches(
            field,
            filter_persons(self.get_all_persons(), field, search_text),
        )
    }

    /// Returns a sorted copy of `persons`; the store is not consulted.
    ///
    /// Empty or unknown `sort_by` returns `persons` unchanged.
    pub fn get_sorted_persons(
        &self,
        persons: &[PersonResponse],
        sort_by: &str,
        sort_order: SortOrder,
    ) -> Vec<PersonResponse> {
        sort_persons_by_property(persons, sort_by, sort_order)
    }

    /// Replaces every mutable field of an existing person.
    ///
    /// # Errors
    /// - `NullArgument` when `update` is absent.
    /// - `ValidationFailed` listing every failed field rule.
    /// - `InvalidArgument` when the person id does not exist.
    pub fn update_person(
        &self,
        update: Option<&PersonUpdateRequest>,
    ) -> ServiceResult<PersonResponse> {
        let update = update.ok_or(ServiceError::NullArgument("person_update_request"))?;
        if let Err(errors) = validate_model(update) {
            warn!(
                "event=person_update module=person_service status=rejected violations={}",
                errors.violations().len()
            );
            return Err(errors.into());
        }

        let Some(mut person) = self.repo.get_person(update.person_id) else {
            warn!(
                "event=person_update module=person_service status=rejected reason=not_found person_id={}",
                update.person_id
            );
            return Err(ServiceError::InvalidArgument(
                "person id does not exist".to_string(),
            ));
        };

        update.apply_to(&mut person);
        self.repo.update_person(&person)?;
        info!(
            "event=person_update module=person_service status=ok person_id={}",
            person.person_id
        );
        Ok(self.to_response(&person))
    }

    /// Deletes a person by id. Returns `false` when no record matched.
    ///
    /// # Errors
    /// - `NullArgument` when `person_id` is absent.
    pub fn delete_person(&self, person_id: Option<PersonId>) -> ServiceResult<bool> {
        let person_id = person_id.ok_or(ServiceError::NullArgument("person_id"))?;
        let removed = self.repo.delete_person(person_id);
        info!(
            "event=person_delete module=person_service status=ok person_id={} removed={}",
            person_id, removed
        );
        Ok(removed > 0)
    }

    fn to_response(&self, person: &Person) -> PersonResponse {
        let country_name = self
            .countries
            .country_by_id(person.country_id)
            .map(|country| country.country_name);
        PersonResponse::from_person(person, country_name, self.clock.today())
    }
}

fn log_filter_matches(
    field: PersonSearchField,
    matches: Vec<PersonResponse>,
) -> Vec<PersonResponse> {
    debug!(
        "event=person_filter module=person_service status=ok field={} matches={}",
        field.as_str(),
        matches.len()
    );
    matches
}
