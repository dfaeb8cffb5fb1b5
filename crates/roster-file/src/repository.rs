//! File-backed student repository.

use async_trait::async_trait;
use tracing::{debug, instrument};

use roster_core::traits::StudentRepository;
use roster_core::{
    ApiResponse, ApiUrl, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PagedResult, Result, Student,
    StudentId, StudentPayload,
};

use crate::store::FileStore;

/// A student repository stored on the local filesystem.
///
/// Answers the same shapes a REST backend would: the first page of matches
/// with the total count, and `{"message": ...}` bodies for mutations.
#[derive(Debug, Clone)]
pub struct FileStudentRepository {
    store: FileStore,
    url: Option<ApiUrl>,
    page_size: u32,
}

impl FileStudentRepository {
    /// Create a repository rooted at the given directory.
    pub fn new(root: impl AsRef<std::path::Path>) -> Self {
        Self {
            store: FileStore::new(root),
            url: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create a repository from a `file://` URL.
    ///
    /// Returns `None` for network URLs.
    pub fn from_url(url: &ApiUrl) -> Option<Self> {
        let root = url.to_file_path()?;
        Some(Self {
            url: Some(url.clone()),
            ..Self::new(root)
        })
    }

    /// Override how many items the first page carries.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Returns the `file://` URL this repository was opened from, if any.
    pub fn url(&self) -> Option<&ApiUrl> {
        self.url.as_ref()
    }

    fn first_page(&self, matches: Vec<Student>) -> PagedResult<Student> {
        let total_count = matches.len() as u64;
        let items = matches.into_iter().take(self.page_size as usize).collect();
        PagedResult::new(items, total_count, DEFAULT_PAGE, self.page_size)
    }
}

#[async_trait]
impl StudentRepository for FileStudentRepository {
    #[instrument(skip(self))]
    async fn list_paged(&self) -> Result<PagedResult<Student>> {
        debug!("Listing students");
        let matches = self.store.list(None)?;
        Ok(self.first_page(matches))
    }

    #[instrument(skip(self))]
    async fn list_paged_by_name(&self, name: &str) -> Result<PagedResult<Student>> {
        debug!("Searching students by name");
        let matches = self.store.list(Some(name))?;
        Ok(self.first_page(matches))
    }

    #[instrument(skip(self), fields(%id))]
    async fn get(&self, id: StudentId) -> Result<Student> {
        debug!("Getting student");
        self.store.get(id)
    }

    #[instrument(skip(self, payload))]
    async fn create(&self, payload: &StudentPayload) -> Result<Student> {
        debug!("Creating student");
        self.store.create(payload)
    }

    #[instrument(skip(self, payload), fields(%id))]
    async fn update(&self, id: StudentId, payload: &StudentPayload) -> Result<ApiResponse> {
        debug!("Updating student");
        self.store.update(id, payload)?;
        Ok(ApiResponse::with_message("Student was updated successfully."))
    }

    #[instrument(skip(self), fields(%id))]
    async fn delete(&self, id: StudentId) -> Result<ApiResponse> {
        debug!("Deleting student");
        self.store.delete(id)?;
        Ok(ApiResponse::with_message("Student was deleted successfully!"))
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> Result<ApiResponse> {
        debug!("Deleting all students");
        let removed = self.store.delete_all()?;
        Ok(ApiResponse::with_message(format!(
            "{} Students were deleted successfully!",
            removed
        )))
    }
}
