//! Database connectivity check

use anyhow::{Context, Result};
use clap::Parser;

use taskctl_server::db::create_pool;
use taskctl_server::{PgTaskStore, TaskStore};

/// Arguments for the ping command
#[derive(Parser, Debug)]
pub struct PingArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

/// Connect to the database and run a trivial query
pub async fn run_ping(args: PingArgs) -> Result<()> {
    let database_url = super::require_database_url(args.database_url)?;

    let pool = create_pool(&database_url)
        .await
        .context("Couldn't open database")?;

    PgTaskStore::new(pool)
        .ping()
        .await
        .context("Database ping failed")?;

    println!("database ok");
    Ok(())
}
