//! Person store contract and in-memory implementation.
//!
//! # Invariants
//! - `update_person` replaces the stored record matched by `person_id`.
//! - `delete_person` removes every record with the id and reports the count.

use crate::model::person::{Person, PersonId};
use crate::repo::{RepoError, RepoResult};
use std::cell::RefCell;

/// Repository interface for person storage.
pub trait PersonRepository {
    fn insert_person(&self, person: Person) -> RepoResult<PersonId>;
    fn list_persons(&self) -> Vec<Person>;
    fn get_person(&self, id: PersonId) -> Option<Person>;
    fn update_person(&self, person: &Person) -> RepoResult<()>;
    /// Returns the number of removed records.
    fn delete_person(&self, id: PersonId) -> usize;
}

/// Vec-backed person store kept for the process lifetime.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    persons: RefCell<Vec<Person>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersonRepository for InMemoryPersonRepository {
    fn insert_person(&self, person: Person) -> RepoResult<PersonId> {
        if person.person_id.is_nil() {
            return Err(RepoError::NilId);
        }

        let mut persons = self.persons.borrow_mut();
        if persons
            .iter()
            .any(|existing| existing.person_id == person.person_id)
        {
            return Err(RepoError::DuplicateId(person.person_id));
        }

        let id = person.person_id;
        persons.push(person);
        Ok(id)
    }

    fn list_persons(&self) -> Vec<Person> {
        self.persons.borrow().clone()
    }

    fn get_person(&self, id: PersonId) -> Option<Person> {
        self.persons
            .borrow()
            .iter()
            .find(|person| person.person_id == id)
            .cloned()
    }

    fn update_person(&self, person: &Person) -> RepoResult<()> {
        let mut persons = self.persons.borrow_mut();
        let stored = persons
            .iter_mut()
            .find(|stored| stored.person_id == person.person_id)
            .ok_or(RepoError::NotFound(person.person_id))?;
        stored.clone_from(person);
        Ok(())
    }

    fn delete_person(&self, id: PersonId) -> usize {
        let mut persons = self.persons.borrow_mut();
        let before = persons.len();
        persons.retain(|person| person.person_id != id);
        before - persons.len()
    }
}
