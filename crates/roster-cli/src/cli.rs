//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{
    add::AddArgs, config::ConfigCommand, delete::DeleteArgs, delete_all::DeleteAllArgs,
    edit::EditArgs, list::ListArgs, open::OpenArgs, search::SearchArgs, show::ShowArgs,
    update::UpdateArgs,
};

/// Student records client.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version = env!("ROSTER_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Backend URL (https://, http://localhost or file://)
    #[arg(long, env = "ROSTER_API", global = true)]
    pub api: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List students, optionally filtered and paged locally
    List(ListArgs),

    /// Search students by name on the backend
    Search(SearchArgs),

    /// Open an address such as /students/3
    Open(OpenArgs),

    /// Show a single student
    Show(ShowArgs),

    /// Add a student
    Add(AddArgs),

    /// Edit a student through the editor
    Edit(EditArgs),

    /// Update a student from its detail page
    Update(UpdateArgs),

    /// Delete a student
    Delete(DeleteArgs),

    /// Delete every student
    DeleteAll(DeleteAllArgs),

    /// Manage persisted defaults
    Config(ConfigCommand),
}
