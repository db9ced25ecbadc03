//! Command implementations for taskctl CLI

pub mod ping;
pub mod serve;

pub use ping::run_ping;
pub use serve::run_serve;

use anyhow::{Context, Result};

/// Resolve the database URL from the flag (which clap already merged with
/// `DATABASE_URL`).
pub(crate) fn require_database_url(url: Option<String>) -> Result<String> {
    url.filter(|u| !u.trim().is_empty())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ./.env")
}
