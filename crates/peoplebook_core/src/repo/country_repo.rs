//! Country store contract and in-memory implementation.

use crate::model::country::{Country, CountryId};
use crate::repo::{RepoError, RepoResult};
use std::cell::RefCell;

/// Repository interface for country storage.
pub trait CountryRepository {
    fn insert_country(&self, country: Country) -> RepoResult<CountryId>;
    fn list_countries(&self) -> Vec<Country>;
    fn get_country(&self, id: CountryId) -> Option<Country>;
    /// Exact, case-sensitive name lookup.
    fn find_country_by_name(&self, name: &str) -> Option<Country>;
}

/// Vec-backed country store kept for the process lifetime.
#[derive(Debug, Default)]
pub struct InMemoryCountryRepository {
    countries: RefCell<Vec<Country>>,
}

impl InMemoryCountryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CountryRepository for InMemoryCountryRepository {
    fn insert_country(&self, country: Country) -> RepoResult<CountryId> {
        if country.country_id.is_nil() {
            return Err(RepoError::NilId);
        }

        let mut countries = self.countries.borrow_mut();
        if countries
            .iter()
            .any(|existing| existing.country_id == country.country_id)
        {
            return Err(RepoError::DuplicateId(country.country_id));
        }

        let id = country.country_id;
        countries.push(country);
        Ok(id)
    }

    fn list_countries(&self) -> Vec<Country> {
        self.countries.borrow().clone()
    }

    fn get_country(&self, id: CountryId) -> Option<Country> {
        self.countries
            .borrow()
            .iter()
            .find(|country| country.country_id == id)
            .cloned()
    }

    fn find_country_by_name(&self, name: &str) -> Option<Country> {
        self.countries
            .borrow()
            .iter()
            .find(|country| country.country_name == name)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::{CountryRepository, InMemoryCountryRepository};
    use crate::model::country::Country;
    use crate::repo::RepoError;
    use uuid::Uuid;

    #[test]
    fn insert_rejects_duplicate_and_nil_ids() {
        let repo = InMemoryCountryRepository::new();
        let country = Country::new("Canada");
        repo.insert_country(country.clone()).unwrap();

        let err = repo.insert_country(country.clone()).unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(country.country_id));

        let nil = Country {
            country_id: Uuid::nil(),
            country_name: "Nowhere".to_string(),
        };
        assert_eq!(repo.insert_country(nil).unwrap_err(), RepoError::NilId);
        assert_eq!(repo.list_countries().len(), 1);
    }

    #[test]
    fn name_lookup_is_case_sensitive() {
        let repo = InMemoryCountryRepository::new();
        repo.insert_country(Country::new("Kenya")).unwrap();

        assert!(repo.find_country_by_name("Kenya").is_some());
        assert!(repo.find_country_by_name("kenya").is_none());
    }
}
