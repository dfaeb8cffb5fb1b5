//! Delete command implementation.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;

use roster_core::Route;

use super::PendingNavigation;
use super::show::open_detail;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Student id
    pub id: String,
}

pub async fn run(args: DeleteArgs, api: Option<&str>) -> Result<()> {
    let id = super::parse_id(&args.id)?;
    let repo = super::connect(api)?;

    let navigator = Arc::new(PendingNavigation::default());
    let mut detail = open_detail(repo, navigator.clone(), &Route::Detail(id)).await?;
    detail.delete().await;

    let Some(next) = navigator.take() else {
        bail!("Failed to delete student {}", id);
    };

    output::success(&format!("Student {} deleted", id));
    output::field("Next", &next.path());
    Ok(())
}
