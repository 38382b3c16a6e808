use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod common;

use commands::add::{AddArgs, add_command};
use commands::delete::delete_command;
use commands::edit::{EditArgs, edit_command};
use commands::list::list_command;

#[derive(Parser)]
#[command(name = "billbook", about = "Customer payment record dashboard")]
struct Cli {
    /// Path to the JSON data file (defaults to payment_dashboard_data.json
    /// in the current directory, or $BILLBOOK_DATA)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all records
    List,
    /// Add a new record
    Add(AddArgs),
    /// Update an existing record
    Edit(EditArgs),
    /// Delete records by id
    Delete {
        /// Ids of the records to delete
        ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let dash = common::open_dashboard(cli.data);

    match &cli.command {
        Commands::List => list_command(&dash).await,
        Commands::Add(args) => add_command(&dash, args).await,
        Commands::Edit(args) => edit_command(&dash, args).await,
        Commands::Delete { ids } => delete_command(&dash, ids).await,
    }
}
