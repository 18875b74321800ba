//! Command-line interface.

use clap::{Parser, ValueEnum};

/// Create, drop or reset the CMS tables in the configured database.
#[derive(Parser, Debug)]
#[command(name = "cms-setup", version, about)]
pub struct Cli {
    /// What to do to the schema
    #[arg(value_enum, default_value_t = SchemaAction::Create)]
    pub action: SchemaAction,

    /// Database URL (overrides DATABASE_URL)
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,

    /// Emit JSON logs instead of the pretty format (same as LOG_FORMAT=json)
    #[arg(long)]
    pub json_logs: bool,
}

/// What the setup run should do to the schema.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaAction {
    /// Create missing tables and indexes
    Create,
    /// Drop every CMS table
    Drop,
    /// Drop, then create again
    Reset,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_action_defaults_to_create() {
        let cli = Cli::try_parse_from(["cms-setup"]).unwrap();
        assert_eq!(cli.action, SchemaAction::Create);
        assert!(cli.database_url.is_none());
        assert!(!cli.json_logs);
    }

    #[test]
    fn test_parses_action_and_flags() {
        let cli = Cli::try_parse_from([
            "cms-setup",
            "reset",
            "--database-url",
            "sqlite::memory:",
            "--json-logs",
        ])
        .unwrap();
        assert_eq!(cli.action, SchemaAction::Reset);
        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
        assert!(cli.json_logs);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(Cli::try_parse_from(["cms-setup", "migrate"]).is_err());
    }

    #[test]
    fn test_help_prints_usage() {
        let err = Cli::try_parse_from(["cms-setup", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
