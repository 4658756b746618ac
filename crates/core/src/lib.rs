//! Domain logic for the manga catalog.
//!
//! Nothing in here performs I/O: the database layer and the HTTP layer both
//! build on these types.

pub mod cover;
pub mod error;
pub mod form;
pub mod search;
pub mod types;
