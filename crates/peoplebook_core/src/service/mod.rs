//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, store calls and response shaping.
//! - Keep callers decoupled from stored records.
//!
//! # Invariants
//! - Services only return response copies, never stored records.

pub mod country_service;
pub mod error;
pub mod person_service;
