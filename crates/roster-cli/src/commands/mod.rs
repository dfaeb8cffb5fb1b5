//! Subcommand implementations.

pub mod add;
pub mod config;
pub mod delete;
pub mod delete_all;
pub mod edit;
pub mod list;
pub mod open;
pub mod search;
pub mod show;
pub mod update;

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Args;

use roster_core::{Route, StudentId};
use roster_views::{FieldEdits, Navigator, SharedRepository};

use crate::backend::CliBackend;
use crate::cli::Commands;

pub async fn handle(command: Commands, api: Option<&str>) -> Result<()> {
    match command {
        Commands::List(args) => list::run(args, api).await,
        Commands::Search(args) => search::run(args, api).await,
        Commands::Open(args) => open::run(args, api).await,
        Commands::Show(args) => show::run(args, api).await,
        Commands::Add(args) => add::run(args, api).await,
        Commands::Edit(args) => edit::run(args, api).await,
        Commands::Update(args) => update::run(args, api).await,
        Commands::Delete(args) => delete::run(args, api).await,
        Commands::DeleteAll(args) => delete_all::run(args, api).await,
        Commands::Config(cmd) => config::run(cmd, api),
    }
}

/// Open the repository for the resolved backend URL.
pub fn connect(api: Option<&str>) -> Result<SharedRepository> {
    let api = crate::config::api_url(api)?;
    Ok(Arc::new(CliBackend::connect(api)))
}

/// Parse a student id argument.
pub fn parse_id(value: &str) -> Result<StudentId> {
    StudentId::parse(value).with_context(|| format!("Invalid student id '{}'", value))
}

/// Optional field overrides shared by the edit commands.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Gender
    #[arg(long)]
    pub gender: Option<String>,
}

impl From<FieldArgs> for FieldEdits {
    fn from(args: FieldArgs) -> Self {
        FieldEdits {
            name: args.name,
            email: args.email,
            gender: args.gender,
        }
    }
}

/// Remembers where a workflow asked to go next.
#[derive(Debug, Default)]
pub struct PendingNavigation {
    route: Mutex<Option<Route>>,
}

impl PendingNavigation {
    pub fn take(&self) -> Option<Route> {
        self.route.lock().ok().and_then(|mut route| route.take())
    }
}

impl Navigator for PendingNavigation {
    fn navigate(&self, route: Route) {
        if let Ok(mut pending) = self.route.lock() {
            *pending = Some(route);
        }
    }
}
