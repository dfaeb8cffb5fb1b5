//! Student repository trait.

use async_trait::async_trait;

use crate::Result;
use crate::student::{ApiResponse, PagedResult, Student, StudentPayload};
use crate::types::StudentId;

/// Access to the student collection of a backend.
///
/// Implementations perform no retry, backoff or timeout policy of their
/// own; failures are returned unchanged, including the HTTP status.
#[cfg_attr(any(test, feature = "test-mocks"), mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Fetch the collection with no query parameters.
    async fn list_paged(&self) -> Result<PagedResult<Student>>;

    /// Fetch the collection filtered by a `name` query parameter.
    ///
    /// `name` is sent verbatim; only URL escaping is applied.
    async fn list_paged_by_name(&self, name: &str) -> Result<PagedResult<Student>>;

    /// Fetch the items of the unfiltered collection.
    async fn list_all(&self) -> Result<Vec<Student>> {
        Ok(self.list_paged().await?.into_items())
    }

    /// Fetch the items matching `name`.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Student>> {
        Ok(self.list_paged_by_name(name).await?.into_items())
    }

    /// Fetch a single student.
    async fn get(&self, id: StudentId) -> Result<Student>;

    /// Create a student; the backend assigns the identifier.
    async fn create(&self, payload: &StudentPayload) -> Result<Student>;

    /// Replace the fields of an existing student.
    async fn update(&self, id: StudentId, payload: &StudentPayload) -> Result<ApiResponse>;

    /// Delete a single student.
    async fn delete(&self, id: StudentId) -> Result<ApiResponse>;

    /// Delete the whole collection.
    async fn delete_all(&self) -> Result<ApiResponse>;
}
