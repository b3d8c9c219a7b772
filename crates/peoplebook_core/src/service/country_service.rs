//! Country use-case service.
//!
//! # Responsibility
//! - Add countries with name uniqueness checks.
//! - Serve country snapshots and id lookups.
//!
//! # Invariants
//! - No two stored countries share a name (case-sensitive).
//! - Lookups with an absent id return `None` instead of failing.

use crate::dto::country_dto::{CountryAddRequest, CountryResponse};
use crate::model::country::{Country, CountryId};
use crate::repo::country_repo::CountryRepository;
use crate::service::error::{ServiceError, ServiceResult};
use log::{info, warn};
use std::rc::Rc;

/// Read-only country lookup handed to other services.
pub trait CountryLookup {
    fn country_by_id(&self, country_id: Option<CountryId>) -> Option<CountryResponse>;
}

impl<T: CountryLookup + ?Sized> CountryLookup for &T {
    fn country_by_id(&self, country_id: Option<CountryId>) -> Option<CountryResponse> {
        (**self).country_by_id(country_id)
    }
}

impl<T: CountryLookup + ?Sized> CountryLookup for Rc<T> {
    fn country_by_id(&self, country_id: Option<CountryId>) -> Option<CountryResponse> {
        (**self).country_by_id(country_id)
    }
}

/// Country service facade over repository implementations.
pub struct CountryService<R: CountryRepository> {
    repo: R,
}

impl<R: CountryRepository> CountryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds one country and returns its generated id with the name.
    ///
    /// # Errors
    /// - `NullArgument` when `request` is absent.
    /// - `InvalidArgument` when the name is absent, empty, or already used.
    pub fn add_country(
        &self,
        request: Option<&CountryAddRequest>,
    ) -> ServiceResult<CountryResponse> {
        let request = request.ok_or(ServiceError::NullArgument("country_add_request"))?;
        let country_name = match request.country_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => {
                warn!("event=country_add module=country_service status=rejected reason=missing_name");
                return Err(ServiceError::InvalidArgument(
                    "country_name must not be empty".to_string(),
                ));
            }
        };

        if self.repo.find_country_by_name(country_name).is_some() {
            warn!("event=country_add module=country_service status=rejected reason=duplicate_name");
            return Err(ServiceError::InvalidArgument(
                "country already exists".to_string(),
            ));
        }

        let country = Country::new(country_name);
        let response = CountryResponse::from(&country);
        self.repo.insert_country(country)?;
        info!(
            "event=country_add module=country_service status=ok country_id={}",
            response.country_id
        );
        Ok(response)
    }

    /// Returns every country in insertion order.
    pub fn get_all_countries(&self) -> Vec<CountryResponse> {
        self.repo
            .list_countries()
            .iter()
            .map(CountryResponse::from)
            .collect()
    }

    /// Gets one country by id; absent ids resolve to `None`.
    pub fn get_country_by_country_id(
        &self,
        country_id: Option<CountryId>,
    ) -> Option<CountryResponse> {
        let country_id = country_id?;
        self.repo
            .get_country(country_id)
            .as_ref()
            .map(CountryResponse::from)
    }
}

impl<R: CountryRepository> CountryLookup for CountryService<R> {
    fn country_by_id(&self, country_id: Option<CountryId>) -> Option<CountryResponse> {
        self.get_country_by_country_id(country_id)
    }
}
