//! todolist-client CLI entry point.

use clap::Parser;
use todolist_client::cli::{Cli, Commands, OutputFormat};
use todolist_client::client::TodolistClient;
use todolist_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = TodolistClient::new(&cli.base_url);

    match cli.command {
        Commands::Todos(todos_cmd) => {
            use todolist_client::cli::todos::TodosAction;
            match todos_cmd.action {
                TodosAction::List => {
                    let todos = client.list_todos().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&todos, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_todos(&todos)),
                    }
                }
                TodosAction::Create { name } => {
                    let todo = client.create_todo(&name).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_todo(&todo))
                        }
                    }
                }
                TodosAction::Get { id, date } => {
                    let todo = client.get_todo(&id, &date).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_todo(&todo)),
                    }
                }
                TodosAction::Update { id, date, name } => {
                    let todo = client.update_todo(&id, &date, &name).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Saved:\n{}", pretty::format_todo(&todo))
                        }
                    }
                }
                TodosAction::Delete { id, date } => {
                    client.delete_todo(&id, &date).await?;
                    if !cli.quiet {
                        println!("Deleted todo {} ({})", id, date);
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use todolist_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Livez => {
                    client.livez().await?;
                    if !cli.quiet {
                        println!("OK");
                    }
                }
            }
        }
    }

    Ok(())
}
