//! Request and response shapes exchanged with service callers.
//!
//! # Responsibility
//! - Convert requests into stored records and stored records into responses.
//! - Compute derived response fields (`age`, `country_name`).
//!
//! # Invariants
//! - Responses are independent copies; mutating one never touches a store.

pub mod country_dto;
pub mod person_dto;
