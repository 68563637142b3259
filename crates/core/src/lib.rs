//! Core types and repository logic for the todos service.
//!
//! Follows the Functional Core pattern: this crate owns the `Todo` record,
//! its validation rules and the repository operations, while concrete
//! storage backends and the HTTP layer live in the application crate.

pub mod storage;
pub mod todo;
