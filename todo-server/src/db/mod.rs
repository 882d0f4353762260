//! Database layer - connection pool, schema setup, and the todo repository
//!
//! # Design Principles
//!
//! - Connection pool with an explicit limit - no Arc<Mutex<Connection>>
//! - Schema created once at startup, idempotently - not inside handlers
//! - Mutations check existence via the statement itself, never silently no-op

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_in_memory};
pub use repos::{DbError, Todo, TodoRepo};
