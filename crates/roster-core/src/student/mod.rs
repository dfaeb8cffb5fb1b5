//! Student data model.
//!
//! The operations over these types live on
//! [`StudentRepository`](crate::StudentRepository).

mod paged;
mod record;
mod response;

pub use paged::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, Page, PagedResult};
pub use record::{Student, StudentDraft, StudentPayload};
pub use response::ApiResponse;
