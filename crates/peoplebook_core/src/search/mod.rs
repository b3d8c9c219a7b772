//! Person search and ordering over response snapshots.
//!
//! # Responsibility
//! - Map caller-supplied field names onto typed accessors.
//! - Keep filter/sort semantics independent from the stores.

pub mod person_query;
