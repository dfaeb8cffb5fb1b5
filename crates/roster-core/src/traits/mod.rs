//! Core traits for backend access.

mod repository;

pub use repository::StudentRepository;

#[cfg(any(test, feature = "test-mocks"))]
pub use repository::MockStudentRepository;
