//! HTTP-backed student repository.

use async_trait::async_trait;
use tracing::{debug, instrument};

use roster_core::traits::StudentRepository;
use roster_core::{ApiResponse, ApiUrl, PagedResult, Result, Student, StudentId, StudentPayload};

use crate::client::ApiClient;
use crate::endpoints::NameQuery;

/// A student repository talking to a REST backend.
///
/// Collection root is `{api}/api/students`; single records live at
/// `{collection}/{id}`.
#[derive(Debug, Clone)]
pub struct HttpStudentRepository {
    client: ApiClient,
}

impl HttpStudentRepository {
    /// Create a repository for the given backend.
    pub fn new(api: ApiUrl) -> Self {
        Self {
            client: ApiClient::new(api),
        }
    }

    /// Returns the backend URL for this repository.
    pub fn url(&self) -> &ApiUrl {
        self.client.api()
    }
}

#[async_trait]
impl StudentRepository for HttpStudentRepository {
    #[instrument(skip(self))]
    async fn list_paged(&self) -> Result<PagedResult<Student>> {
        debug!("Listing students");
        let url = self.url().collection_url();
        self.client.get(&url).await
    }

    #[instrument(skip(self))]
    async fn list_paged_by_name(&self, name: &str) -> Result<PagedResult<Student>> {
        debug!("Searching students by name");
        let url = self.url().collection_url();
        self.client.query(&url, &NameQuery { name }).await
    }

    #[instrument(skip(self), fields(%id))]
    async fn get(&self, id: StudentId) -> Result<Student> {
        debug!("Getting student");
        let url = self.url().record_url(id);
        self.client.get(&url).await
    }

    #[instrument(skip(self, payload))]
    async fn create(&self, payload: &StudentPayload) -> Result<Student> {
        debug!("Creating student");
        let url = self.url().collection_url();
        self.client.post(&url, payload).await
    }

    #[instrument(skip(self, payload), fields(%id))]
    async fn update(&self, id: StudentId, payload: &StudentPayload) -> Result<ApiResponse> {
        debug!("Updating student");
        let url = self.url().record_url(id);
        self.client.put(&url, payload).await
    }

    #[instrument(skip(self), fields(%id))]
    async fn delete(&self, id: StudentId) -> Result<ApiResponse> {
        debug!("Deleting student");
        let url = self.url().record_url(id);
        self.client.delete(&url).await
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> Result<ApiResponse> {
        debug!("Deleting all students");
        let url = self.url().collection_url();
        self.client.delete(&url).await
    }
}
