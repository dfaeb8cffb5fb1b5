//! Edit command implementation.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Args;

use roster_core::StudentRepository;
use roster_views::{FieldEdits, StudentList, SubmittingLauncher};

use super::FieldArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Student id
    pub id: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

pub async fn run(args: EditArgs, api: Option<&str>) -> Result<()> {
    let id = super::parse_id(&args.id)?;
    let edits = FieldEdits::from(args.fields);
    if edits.is_empty() {
        bail!("Nothing to change. Pass --name, --email or --gender.");
    }

    let repo = super::connect(api)?;
    let launcher = Arc::new(SubmittingLauncher::new(repo.clone(), edits));
    let mut list = StudentList::new(repo.clone(), launcher.clone());
    list.activate().await;

    let loaded = list
        .state()
        .students
        .iter()
        .find(|student| student.id == Some(id))
        .cloned();
    let student = match loaded {
        Some(student) => student,
        None => repo
            .get(id)
            .await
            .with_context(|| format!("Failed to load student {}", id))?,
    };

    let outcome = list.edit(&student).await;
    let message = launcher.last_message().await.unwrap_or_default();

    if outcome.is_none() {
        bail!("{}", message);
    }
    output::success(&message);
    Ok(())
}
