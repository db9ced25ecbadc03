//! Domain models for the tasks table
//!
//! Request bodies are decoded straight into these types; decoding is the
//! only input check the service performs.

pub mod task;
pub mod validation;

pub use task::{NewTask, Task, TaskId, TaskUpdate, DEFAULT_STATUS};
pub use validation::ValidationError;
