//! Open command implementation.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use roster_core::Route;
use roster_views::FieldEdits;

use super::list::{list_screen, render};
use super::show::open_detail;
use super::{FieldArgs, PendingNavigation};
use crate::output;

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Address to open, e.g. /students, /students/add or /students/3
    pub address: String,

    /// Field values for the add form
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: OpenArgs, api: Option<&str>) -> Result<()> {
    let route = Route::parse(&args.address);
    if Route::redirects(&args.address) {
        output::note(&format!("Redirecting to {}", route));
    }

    match route {
        Route::List => {
            let repo = super::connect(api)?;
            let mut list = list_screen(repo);
            list.activate().await;
            render(&list, args.json)
        }
        Route::Add => super::add::add_student(FieldEdits::from(args.fields), args.json, api).await,
        Route::Detail(_) => {
            let repo = super::connect(api)?;
            let navigator = Arc::new(PendingNavigation::default());
            let detail = open_detail(repo, navigator, &route).await?;
            output::student(detail.student(), args.json)
        }
    }
}
