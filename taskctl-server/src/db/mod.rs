//! Database layer - connection pool and task stores
//!
//! - One shared `PgPool`; handlers never open their own connections
//! - Every store operation is a single parameterized statement
//! - Missing rows surface as `DbError::NotFound`, not as empty results

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
