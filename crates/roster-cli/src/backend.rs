//! Backend selection for the CLI.

use async_trait::async_trait;

use roster_core::traits::StudentRepository;
use roster_core::{ApiResponse, ApiUrl, PagedResult, Result, Student, StudentId, StudentPayload};
use roster_file::FileStudentRepository;
use roster_http::HttpStudentRepository;

/// The repository a CLI invocation talks to.
#[derive(Debug)]
pub enum CliBackend {
    File(FileStudentRepository),
    Http(HttpStudentRepository),
}

impl CliBackend {
    /// Pick the file store for `file://` URLs and the REST client otherwise.
    pub fn connect(api: ApiUrl) -> Self {
        match FileStudentRepository::from_url(&api) {
            Some(repo) => CliBackend::File(repo),
            None => CliBackend::Http(HttpStudentRepository::new(api)),
        }
    }
}

#[async_trait]
impl StudentRepository for CliBackend {
    async fn list_paged(&self) -> Result<PagedResult<Student>> {
        match self {
            CliBackend::File(repo) => repo.list_paged().await,
            CliBackend::Http(repo) => repo.list_paged().await,
        }
    }

    async fn list_paged_by_name(&self, name: &str) -> Result<PagedResult<Student>> {
        match self {
            CliBackend::File(repo) => repo.list_paged_by_name(name).await,
            CliBackend::Http(repo) => repo.list_paged_by_name(name).await,
        }
    }

    async fn get(&self, id: StudentId) -> Result<Student> {
        match self {
            CliBackend::File(repo) => repo.get(id).await,
            CliBackend::Http(repo) => repo.get(id).await,
        }
    }

    async fn create(&self, payload: &StudentPayload) -> Result<Student> {
        match self {
            CliBackend::File(repo) => repo.create(payload).await,
            CliBackend::Http(repo) => repo.create(payload).await,
        }
    }

    async fn update(&self, id: StudentId, payload: &StudentPayload) -> Result<ApiResponse> {
        match self {
            CliBackend::File(repo) => repo.update(id, payload).await,
            CliBackend::Http(repo) => repo.update(id, payload).await,
        }
    }

    async fn delete(&self, id: StudentId) -> Result<ApiResponse> {
        match self {
            CliBackend::File(repo) => repo.delete(id).await,
            CliBackend::Http(repo) => repo.delete(id).await,
        }
    }

    async fn delete_all(&self) -> Result<ApiResponse> {
        match self {
            CliBackend::File(repo) => repo.delete_all().await,
            CliBackend::Http(repo) => repo.delete_all().await,
        }
    }
}
