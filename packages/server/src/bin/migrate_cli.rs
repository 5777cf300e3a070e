//! CLI for running schema migrations against the primary store.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recruit_core::config::Config;
use sqlx::PgPool;

#[derive(Parser)]
#[command(name = "migrate_cli")]
#[command(about = "Schema migration CLI for the recruitment platform")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply all pending migrations
    Run,

    /// Print applied migration versions
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to the database")?;

    match cli.command {
        Commands::Run => {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Migration failed")?;
            println!("Migrations applied");
        }
        Commands::Status => {
            let rows: Vec<(i64, String)> =
                sqlx::query_as("SELECT version, description FROM _sqlx_migrations ORDER BY version")
                    .fetch_all(&pool)
                    .await
                    .context("No migration history (run migrations first)")?;
            for (version, description) in rows {
                println!("{version} {description}");
            }
        }
    }

    Ok(())
}
