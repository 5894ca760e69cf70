//! CLI command definitions.

pub mod health;
pub mod todos;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the todolist API.
#[derive(Debug, Parser)]
#[command(name = "todolist-client")]
#[command(about = "CLI client for the todolist API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "TODOLIST_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// ToDo management.
    Todos(todos::TodosCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update_command() {
        let cli = Cli::try_parse_from([
            "todolist-client",
            "--format",
            "json",
            "todos",
            "update",
            "--id",
            "cd2f4e36-1b2a-4c1b-9f9a-6d8a7e1f2b3c",
            "--date",
            "2024-01-15T10:30:00.000Z",
            "--name",
            "Buy milk",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Todos(cmd) => match cmd.action {
                todos::TodosAction::Update { id, date, name } => {
                    assert_eq!(id, "cd2f4e36-1b2a-4c1b-9f9a-6d8a7e1f2b3c");
                    assert_eq!(date, "2024-01-15T10:30:00.000Z");
                    assert_eq!(name, "Buy milk");
                }
                other => panic!("unexpected action: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_create_requires_name() {
        assert!(Cli::try_parse_from(["todolist-client", "todos", "create"]).is_err());
    }
}
