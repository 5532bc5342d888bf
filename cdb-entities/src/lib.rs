#![deny(missing_debug_implementations)]

//! # cdb-entities
//!
//! Reusable, agnostic domain entities for commentdb.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod comment;
pub mod id;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
