//! Setup configuration loaded from environment variables and the command line.

use std::env;

use cms_infra::DatabaseConfig;

use crate::cli::Cli;

/// Setup configuration.
#[derive(Debug, Clone)]
pub struct SetupConfig {
    pub database: DatabaseConfig,
    /// Emit JSON logs instead of the pretty format.
    pub json_logs: bool,
}

impl SetupConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.database_url {
            self.database.url = url.clone();
        }
        self.json_logs |= cli.json_logs;
        self
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_overrides_database_url() {
        let cli = Cli::try_parse_from(["cms-setup", "--database-url", "sqlite::memory:"]).unwrap();
        let config = SetupConfig {
            database: DatabaseConfig::default(),
            json_logs: false,
        }
        .with_cli(&cli);

        assert_eq!(config.database.url, "sqlite::memory:");
        assert!(!config.json_logs);
    }
}
