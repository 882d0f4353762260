//! todo-server: minimal HTTP CRUD service for todo records
//!
//! Exposes create/list/update/delete over a single SQLite table,
//! with JSON request/response shapes validated at the boundary.

pub mod db;
pub mod http;

pub use db::{create_pool, DbError, Todo, TodoRepo};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
