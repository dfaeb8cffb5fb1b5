//! Add command implementation.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;

use roster_views::{FieldEdits, StudentList, SubmittingLauncher};

use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Gender
    #[arg(long)]
    pub gender: String,

    /// Print the created student as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: AddArgs, api: Option<&str>) -> Result<()> {
    let edits = FieldEdits {
        name: Some(args.name),
        email: Some(args.email),
        gender: Some(args.gender),
    };
    add_student(edits, args.json, api).await
}

/// Run the add overlay from the list screen with `edits` as input.
pub async fn add_student(edits: FieldEdits, as_json: bool, api: Option<&str>) -> Result<()> {
    let repo = super::connect(api)?;
    let launcher = Arc::new(SubmittingLauncher::new(repo.clone(), edits));
    let mut list = StudentList::new(repo, launcher.clone());

    let outcome = list.open_add().await;
    let message = launcher.last_message().await.unwrap_or_default();

    let Some(outcome) = outcome else {
        bail!("{}", message);
    };

    if as_json {
        return output::json_pretty(outcome.student());
    }
    output::success(&message);
    println!();
    output::student(outcome.student(), false)
}
