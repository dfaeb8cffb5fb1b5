//! roster-views - screen controllers for the roster client.
//!
//! Each controller holds the state one screen renders and drives a
//! [`StudentRepository`] to change it:
//!
//! - [`StudentList`]: paged list, server search and local filter
//! - [`StudentEditor`]: the add/edit overlay
//! - [`StudentDetail`]: a single student's page
//!
//! Controllers never fail outward. Errors end up in a user-facing message or
//! in the log, and the controller stays usable.

pub mod detail;
pub mod editor;
pub mod form;
pub mod list;
pub mod validation;

use std::sync::Arc;

use roster_core::StudentRepository;

pub use detail::{Navigator, StudentDetail};
pub use editor::{
    EditorContext, EditorHandle, EditorLauncher, EditorMode, EditorOutcome, StudentEditor,
    SubmittingLauncher,
};
pub use form::{Field, FieldEdits, FormHandle, StudentForm};
pub use list::{ListState, RowKey, StudentList};
pub use validation::{ValidationError, validate_payload};

/// The repository handle shared by all controllers.
pub type SharedRepository = Arc<dyn StudentRepository>;
