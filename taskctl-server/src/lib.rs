//! taskctl-server: JSON CRUD over a single `tasks` table
//!
//! Each handler maps onto one parameterized SQL statement run through
//! a shared [`sqlx::PgPool`]. The [`db::TaskStore`] trait sits between
//! the HTTP layer and Postgres so the router can run against an
//! in-memory store in tests.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryTaskStore, PgTaskStore, TaskStore};
pub use http::{create_router, run_server, ApiError, AppState, ServerConfig};
pub use models::{NewTask, Task, TaskId, TaskUpdate};
