//! Task store implementations
//!
//! [`TaskStore`] is the seam the HTTP layer talks to:
//! - [`PgTaskStore`] runs parameterized SQL against Postgres
//! - [`MemoryTaskStore`] keeps rows in process for router tests

pub mod memory;
pub mod tasks;

use async_trait::async_trait;

use crate::models::{NewTask, Task, TaskId, TaskUpdate};

pub use memory::MemoryTaskStore;
pub use tasks::{PgTaskStore, TASKS_DDL};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn task_not_found(id: TaskId) -> Self {
        Self::NotFound {
            resource: "task",
            id: id.to_string(),
        }
    }
}

/// CRUD over the tasks table
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All tasks ordered by id.
    async fn list(&self) -> Result<Vec<Task>, DbError>;

    /// A single task; `DbError::NotFound` when the id does not exist.
    async fn get(&self, id: TaskId) -> Result<Task, DbError>;

    /// Insert a task and return the stored row.
    async fn create(&self, task: NewTask) -> Result<Task, DbError>;

    /// Overwrite the writable columns of a task and stamp `modified_datetime`.
    async fn update(&self, id: TaskId, update: TaskUpdate) -> Result<Task, DbError>;

    /// Delete a task (idempotent). Returns the number of rows removed.
    async fn delete(&self, id: TaskId) -> Result<u64, DbError>;

    /// Connectivity probe.
    async fn ping(&self) -> Result<(), DbError>;
}
