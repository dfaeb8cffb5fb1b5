//! Delete-all command implementation.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use roster_core::StudentRepository;

use crate::output;

#[derive(Args, Debug)]
pub struct DeleteAllArgs {
    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub async fn run(args: DeleteAllArgs, api: Option<&str>) -> Result<()> {
    let repo = super::connect(api)?;

    // Confirm unless --yes
    if !args.yes {
        eprint!("This will delete every student. Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let response = repo
        .delete_all()
        .await
        .context("Failed to delete students")?;

    output::success(response.message().unwrap_or("All students deleted"));
    Ok(())
}
