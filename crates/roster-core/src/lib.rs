//! roster-core - types and traits for the roster student records client.
//!
//! The backend is reached through [`StudentRepository`]; the network and
//! filesystem implementations live in `roster-http` and `roster-file`.

pub mod error;
pub mod student;
pub mod traits;
pub mod types;

pub use error::Error;
pub use student::{
    ApiResponse, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, Page, PagedResult, Student, StudentDraft,
    StudentPayload,
};
pub use traits::StudentRepository;
pub use types::{ApiUrl, Route, StudentId};

#[cfg(any(test, feature = "test-mocks"))]
pub use traits::MockStudentRepository;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
