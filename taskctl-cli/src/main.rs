//! taskctl CLI - runs and checks the task CRUD service
//!
//! - `serve`: start the HTTP API backed by Postgres
//! - `ping`: verify the database is reachable

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "taskctl",
    author,
    version,
    about = "JSON CRUD service for a single tasks table"
)]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Check database connectivity
    Ping(commands::ping::PingArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads DATABASE_URL; a missing file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .context("Failed to initialize tracing")?;

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Ping(args) => commands::run_ping(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
