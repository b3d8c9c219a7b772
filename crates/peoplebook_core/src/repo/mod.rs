//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define the entity store contracts used by services.
//! - Keep storage details out of service/business orchestration.
//!
//! # Invariants
//! - Ids are unique within one store; inserting a duplicate or nil id fails.
//! - List operations return snapshots in insertion order.
//! - Stores are single-threaded (`RefCell`), matching the service model.

use crate::model::person::PersonId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod country_repo;
pub mod person_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for in-memory store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Record id is already present in the store.
    DuplicateId(Uuid),
    /// Record carries the nil id.
    NilId,
    /// Target person does not exist.
    NotFound(PersonId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "record id already exists: {id}"),
            Self::NilId => write!(f, "record id must not be nil"),
            Self::NotFound(id) => write!(f, "person not found: {id}"),
        }
    }
}

impl Error for RepoError {}
