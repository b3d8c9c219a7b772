//! Error taxonomy shared by country and person services.

use crate::repo::RepoError;
use crate::validation::ValidationErrors;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service-level failure. Every variant is raised before any store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A required argument was absent. Carries the argument name.
    NullArgument(&'static str),
    /// A supplied value breaks a business rule.
    InvalidArgument(String),
    /// One or more structural field rules failed.
    ValidationFailed(ValidationErrors),
    /// Store-level failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullArgument(name) => write!(f, "argument must not be null: {name}"),
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::ValidationFailed(errors) => write!(f, "validation failed: {errors}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ValidationFailed(errors) => Some(errors),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(value: ValidationErrors) -> Self {
        Self::ValidationFailed(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
