//! Task record and request bodies

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::FromRow;

use super::ValidationError;

/// Status written on create when the request does not name one
pub const DEFAULT_STATUS: &str = "pending";

/// Primary key of the tasks table (`SERIAL`).
///
/// Travels as a JSON string (`"task_id": "7"`); integers are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct TaskId(pub i32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "task_id" });
        }
        s.parse::<i32>().map(TaskId).map_err(|_| ValidationError::InvalidFormat {
            field: "task_id",
            reason: "expected an integer",
        })
    }
}

impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i32),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(TaskId(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// One row of the tasks table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub task_id: TaskId,
    pub task_name: String,
    pub description: String,
    pub status: String,
    pub duedate: DateTime<Utc>,
    pub completion_datetime: Option<DateTime<Utc>>,
    pub created_datetime: DateTime<Utc>,
    pub modified_datetime: Option<DateTime<Utc>>,
}

/// Body of `POST /task`
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub task_name: String,
    #[serde(default)]
    pub description: String,
    pub duedate: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<String>,
}

impl NewTask {
    /// Status to store; a missing or blank status becomes [`DEFAULT_STATUS`].
    pub fn status_or_default(&self) -> &str {
        self.status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_STATUS)
    }
}

/// Body of `PUT /task/{id}`: replaces every writable column.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskUpdate {
    pub task_name: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    pub duedate: DateTime<Utc>,
    #[serde(default)]
    pub completion_datetime: Option<DateTime<Utc>>,
}
