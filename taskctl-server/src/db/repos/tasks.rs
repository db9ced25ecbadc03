//! Postgres task store
//!
//! One statement per operation. Writes use `RETURNING` so the caller gets
//! the stored row (generated id, server timestamps) without a second read.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, TaskStore};
use crate::models::{NewTask, Task, TaskId, TaskUpdate};

/// DDL for the tasks table, for provisioning test databases.
pub const TASKS_DDL: &str = include_str!("../../../sql/tasks.sql");

const TASK_COLUMNS: &str = "task_id, task_name, description, status, duedate, \
     completion_datetime, created_datetime, modified_datetime";

/// Task store backed by a Postgres pool
#[derive(Clone)]
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn list(&self) -> Result<Vec<Task>, DbError> {
        let tasks: Vec<Task> =
            sqlx::query_as(&format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY task_id"))
                .fetch_all(&self.pool)
                .await?;

        tracing::debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    async fn get(&self, id: TaskId) -> Result<Task, DbError> {
        sqlx::query_as(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE task_id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::task_not_found(id))
    }

    async fn create(&self, task: NewTask) -> Result<Task, DbError> {
        let created: Task = sqlx::query_as(&format!(
            r#"
            INSERT INTO tasks (task_name, description, status, duedate)
            VALUES ($1, $2, $3, $4)
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(&task.task_name)
        .bind(&task.description)
        .bind(task.status_or_default())
        .bind(task.duedate)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(task_id = %created.task_id, "inserted task");
        Ok(created)
    }

    async fn update(&self, id: TaskId, update: TaskUpdate) -> Result<Task, DbError> {
        sqlx::query_as(&format!(
            r#"
            UPDATE tasks
            SET task_name = $1,
                description = $2,
                status = $3,
                duedate = $4,
                completion_datetime = $5,
                modified_datetime = CURRENT_TIMESTAMP
            WHERE task_id = $6
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(&update.task_name)
        .bind(&update.description)
        .bind(&update.status)
        .bind(update.duedate)
        .bind(update.completion_datetime)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::task_not_found(id))
    }

    async fn delete(&self, id: TaskId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM tasks WHERE task_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
