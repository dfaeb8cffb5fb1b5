//! Search command implementation.

use anyhow::Result;
use clap::Args;

use super::list::{list_screen, render};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Name to search for (blank lists everyone)
    pub query: String,

    /// Print one JSON object per row
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SearchArgs, api: Option<&str>) -> Result<()> {
    let repo = super::connect(api)?;
    let mut list = list_screen(repo);
    list.search(&args.query).await;

    render(&list, args.json)
}
