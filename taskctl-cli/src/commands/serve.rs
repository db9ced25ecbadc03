//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use taskctl_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use taskctl_server::{run_server, PgTaskStore, ServerConfig};

use super::require_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TASKCTL_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub request_timeout: u64,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url)?;

    tracing::info!("Starting taskctl server on {}", args.bind);

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;
    tracing::info!("Opened database.");

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.request_timeout),
    };

    // Run server (blocks until shutdown)
    run_server(Arc::new(PgTaskStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
