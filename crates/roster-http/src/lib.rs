//! roster-http - REST-backed student repository.

mod client;
mod endpoints;
mod repository;

pub use repository::HttpStudentRepository;
