//! Update command implementation.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;

use roster_core::Route;
use roster_views::detail::FIX_ERRORS_BEFORE_UPDATE;
use roster_views::{FieldEdits, StudentForm};

use super::show::open_detail;
use super::{FieldArgs, PendingNavigation};
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Student id
    pub id: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

pub async fn run(args: UpdateArgs, api: Option<&str>) -> Result<()> {
    let id = super::parse_id(&args.id)?;
    let repo = super::connect(api)?;

    let navigator = Arc::new(PendingNavigation::default());
    let mut detail = open_detail(repo, navigator, &Route::Detail(id)).await?;
    FieldEdits::from(args.fields).apply_to_student(detail.student_mut());

    let mut form = StudentForm::from(detail.student());
    detail.update(Some(&mut form)).await;

    if detail.message() == FIX_ERRORS_BEFORE_UPDATE {
        for field in form.visible_errors() {
            output::error(&format!("Invalid {}", field.as_str()));
        }
        bail!("{}", detail.message());
    }
    if detail.message().is_empty() {
        bail!("Failed to update student {}", id);
    }

    output::success(detail.message());
    Ok(())
}
