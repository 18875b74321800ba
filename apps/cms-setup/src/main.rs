//! # CMS Setup
//!
//! Creates, drops or resets the CMS tables in the configured database.
//!
//! ```text
//! cms-setup [create|drop|reset] [--database-url URL] [--json-logs]
//! ```

use std::process::ExitCode;

use clap::Parser;
use cms_core::error::RepoError;
use cms_infra::Database;

mod cli;
mod config;
mod telemetry;

use cli::{Cli, SchemaAction};
use config::SetupConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SetupConfig::from_env().with_cli(&cli);
    telemetry::init_telemetry(config.json_logs);

    match run(&config, cli.action).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Schema setup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &SetupConfig, action: SchemaAction) -> Result<(), RepoError> {
    tracing::info!(url = %config.database.url, ?action, "Running schema setup");

    let db = Database::init(&config.database).await?;
    let registry = db.registry();

    match action {
        SchemaAction::Create => registry.create_all(db.conn()).await?,
        SchemaAction::Drop => registry.drop_all(db.conn()).await?,
        SchemaAction::Reset => {
            registry.drop_all(db.conn()).await?;
            registry.create_all(db.conn()).await?;
        }
    }

    db.shutdown().await
}
