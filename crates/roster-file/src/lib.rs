//! roster-file - Filesystem-backed student repository.

mod repository;
mod store;

pub use repository::FileStudentRepository;
pub use store::FileStore;
