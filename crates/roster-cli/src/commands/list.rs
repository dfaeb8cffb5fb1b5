//! List command implementation.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use roster_views::list::{LOAD_FAILED, SEARCH_FAILED};
use roster_views::{FieldEdits, SharedRepository, StudentList, SubmittingLauncher};

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show rows whose name, email or gender contains this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Page of the loaded rows to show (1-based)
    #[arg(long)]
    pub page: Option<usize>,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Print one JSON object per row
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, api: Option<&str>) -> Result<()> {
    let repo = super::connect(api)?;
    let mut list = list_screen(repo);
    list.activate().await;

    if let Some(filter) = &args.filter {
        list.apply_local_filter(filter);
    }
    if args.page.is_some() || args.page_size.is_some() {
        let page = args.page.unwrap_or(1).max(1);
        let page_size = args.page_size.unwrap_or(list.state().page_size).max(1);
        list.on_page_change(page - 1, page_size);
    }

    render(&list, args.json)
}

/// A list screen whose editor has nothing to fill in.
pub fn list_screen(repo: SharedRepository) -> StudentList {
    let launcher = Arc::new(SubmittingLauncher::new(repo.clone(), FieldEdits::default()));
    StudentList::new(repo, launcher)
}

/// Print the visible rows and a range footer, failing on load errors.
pub fn render(list: &StudentList, as_json: bool) -> Result<()> {
    let state = list.state();
    if state.message == LOAD_FAILED || state.message == SEARCH_FAILED {
        bail!("{}", state.message);
    }
    if !state.message.is_empty() {
        output::note(&state.message);
    }

    let rows = list.visible_rows();
    if rows.is_empty() {
        if state.message.is_empty() {
            output::note("No students found.");
        }
        return Ok(());
    }

    output::students(&rows, as_json)?;

    if !as_json {
        let start = state
            .view_page
            .saturating_mul(state.page_size.max(1) as usize);
        eprintln!();
        eprintln!(
            "{}",
            format!(
                "{}-{} of {} shown (total {})",
                start.saturating_add(1),
                start.saturating_add(rows.len()),
                list.filtered_len(),
                state.total_count
            )
            .dimmed()
        );
    }

    Ok(())
}
