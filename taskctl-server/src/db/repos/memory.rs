//! In-memory task store
//!
//! Mirrors `PgTaskStore` semantics (sequential ids from 1, server-side
//! timestamps, idempotent delete) without a database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{DbError, TaskStore};
use crate::models::{NewTask, Task, TaskId, TaskUpdate};

#[derive(Default)]
struct Inner {
    last_id: i32,
    tasks: BTreeMap<TaskId, Task>,
}

/// Task store held in process memory
#[derive(Default)]
pub struct MemoryTaskStore {
    inner: RwLock<Inner>,
    offline: AtomicBool,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), DbError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list(&self) -> Result<Vec<Task>, DbError> {
        self.check_online()?;
        Ok(self.inner.read().await.tasks.values().cloned().collect())
    }

    async fn get(&self, id: TaskId) -> Result<Task, DbError> {
        self.check_online()?;
        self.inner
            .read()
            .await
            .tasks
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::task_not_found(id))
    }

    async fn create(&self, task: NewTask) -> Result<Task, DbError> {
        self.check_online()?;
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = TaskId(inner.last_id);

        let stored = Task {
            task_id: id,
            status: task.status_or_default().to_owned(),
            task_name: task.task_name,
            description: task.description,
            duedate: task.duedate,
            completion_datetime: None,
            created_datetime: Utc::now(),
            modified_datetime: None,
        };
        inner.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: TaskId, update: TaskUpdate) -> Result<Task, DbError> {
        self.check_online()?;
        let mut inner = self.inner.write().await;
        let task = inner
            .tasks
            .get_mut(&id)
            .ok_or_else(|| DbError::task_not_found(id))?;

        task.task_name = update.task_name;
        task.description = update.description;
        task.status = update.status;
        task.duedate = update.duedate;
        task.completion_datetime = update.completion_datetime;
        task.modified_datetime = Some(Utc::now());
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> Result<u64, DbError> {
        self.check_online()?;
        let removed = self.inner.write().await.tasks.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.check_online()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn due() -> DateTime<Utc> {
        "2026-03-01T12:00:00Z".parse().unwrap()
    }

    fn new_task(name: &str) -> NewTask {
        NewTask {
            task_name: name.into(),
            description: String::new(),
            duedate: due(),
            status: None,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_list_is_ordered() {
        let store = MemoryTaskStore::new();
        let a = store.create(new_task("a")).await.unwrap();
        let b = store.create(new_task("b")).await.unwrap();
        assert_eq!(a.task_id, TaskId(1));
        assert_eq!(b.task_id, TaskId(2));

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.task_name)
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryTaskStore::new();
        let a = store.create(new_task("a")).await.unwrap();
        store.delete(a.task_id).await.unwrap();
        let b = store.create(new_task("b")).await.unwrap();
        assert_eq!(b.task_id, TaskId(2));
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = MemoryTaskStore::new();
        let result = store
            .update(
                TaskId(5),
                TaskUpdate {
                    task_name: "x".into(),
                    description: String::new(),
                    status: "done".into(),
                    duedate: due(),
                    completion_datetime: None,
                },
            )
            .await;
        assert!(matches!(result, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn offline_store_fails_every_call() {
        let store = MemoryTaskStore::new();
        store.set_offline(true);
        assert!(matches!(store.ping().await, Err(DbError::Sqlx(_))));
        assert!(matches!(store.list().await, Err(DbError::Sqlx(_))));

        store.set_offline(false);
        assert!(store.ping().await.is_ok());
    }
}
