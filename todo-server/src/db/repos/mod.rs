//! Repository implementations for database access
//!
//! Each mutation checks existence via the statement itself
//! (RETURNING / rows_affected) rather than check-then-write.

pub mod todos;

pub use todos::{DbError, Todo, TodoRepo};
