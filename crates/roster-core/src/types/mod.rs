//! Core roster types.
//!
//! These types enforce their invariants at construction time.

mod api_url;
mod route;
mod student_id;

pub use api_url::{ApiUrl, DEFAULT_API_URL, STUDENTS_PATH};
pub use route::{LIST_PATH, Route};
pub use student_id::StudentId;
