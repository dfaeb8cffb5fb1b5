//! Show command implementation.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;

use roster_core::Route;
use roster_views::{Navigator, SharedRepository, StudentDetail};

use super::PendingNavigation;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Student id
    pub id: String,

    /// Print the student as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ShowArgs, api: Option<&str>) -> Result<()> {
    let id = super::parse_id(&args.id)?;
    let repo = super::connect(api)?;

    let navigator = Arc::new(PendingNavigation::default());
    let detail = open_detail(repo, navigator, &Route::Detail(id)).await?;
    output::student(detail.student(), args.json)
}

/// Activate the detail page for `route`, failing if nothing was loaded.
pub async fn open_detail(
    repo: SharedRepository,
    navigator: Arc<dyn Navigator>,
    route: &Route,
) -> Result<StudentDetail> {
    let mut detail = StudentDetail::page(repo, navigator, route);
    detail.activate().await;

    if detail.student().id.is_none() {
        bail!("Student not found at {}", route);
    }
    Ok(detail)
}
