//! Stored domain records for the country/person address book.
//!
//! # Responsibility
//! - Define the canonical shapes kept inside the in-memory stores.
//! - Own identity generation for newly created records.
//!
//! # Invariants
//! - Every stored record is identified by a non-nil `Uuid`.
//! - Stored records never leave the store directly; callers receive DTO
//!   copies from the service layer.

pub mod country;
pub mod person;
