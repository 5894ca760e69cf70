//! ToDo CLI commands.

use clap::{Parser, Subcommand};

/// ToDo management commands.
#[derive(Debug, Parser)]
pub struct TodosCommand {
    #[command(subcommand)]
    pub action: TodosAction,
}

/// Available ToDo actions.
#[derive(Debug, Subcommand)]
pub enum TodosAction {
    /// List all ToDos.
    List,
    /// Create a new ToDo.
    Create {
        /// ToDo name.
        #[arg(long)]
        name: String,
    },
    /// Get a ToDo by key.
    Get {
        /// ToDo ID (UUID).
        #[arg(long)]
        id: String,
        /// Creation timestamp (YYYY-MM-DDTHH:mm:ss.sssZ).
        #[arg(long)]
        date: String,
    },
    /// Rename a ToDo, creating it if absent.
    Update {
        /// ToDo ID (UUID).
        #[arg(long)]
        id: String,
        /// Creation timestamp (YYYY-MM-DDTHH:mm:ss.sssZ).
        #[arg(long)]
        date: String,
        /// New name.
        #[arg(long)]
        name: String,
    },
    /// Delete a ToDo by key.
    Delete {
        /// ToDo ID (UUID).
        #[arg(long)]
        id: String,
        /// Creation timestamp (YYYY-MM-DDTHH:mm:ss.sssZ).
        #[arg(long)]
        date: String,
    },
}
