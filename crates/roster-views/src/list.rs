//! List, search and filter over the student collection.

use std::sync::Arc;

use tracing::{debug, error, instrument};

use roster_core::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PagedResult, Result, Student, StudentId};

use crate::SharedRepository;
use crate::editor::{EditorContext, EditorLauncher, EditorOutcome};

pub const LOAD_FAILED: &str = "Failed to load students. Please try again.";
pub const SEARCH_FAILED: &str = "Search failed. Please try again.";

/// Message shown when a search returns nothing.
pub fn no_results(query: &str) -> String {
    format!("No students found for \"{}\".", query)
}

/// Key used to keep rows stable across reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(StudentId),
    Index(usize),
}

/// Everything the list screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub students: Vec<Student>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    /// Text of the server-side search box.
    pub search: String,
    /// Normalized client-side filter.
    pub filter: String,
    pub loading: bool,
    pub message: String,
    pub selected: Option<Student>,
    pub selected_index: Option<usize>,
    /// Zero-based page of the filtered rows being shown.
    pub view_page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            total_count: 0,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            filter: String::new(),
            loading: false,
            message: String::new(),
            selected: None,
            selected_index: None,
            view_page: 0,
        }
    }
}

/// Controller for the student list screen.
pub struct StudentList {
    repo: SharedRepository,
    launcher: Arc<dyn EditorLauncher>,
    state: ListState,
}

impl StudentList {
    pub fn new(repo: SharedRepository, launcher: Arc<dyn EditorLauncher>) -> Self {
        Self {
            repo,
            launcher,
            state: ListState::default(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Load the first view of the screen.
    pub async fn activate(&mut self) {
        self.retrieve().await;
    }

    /// Reload the unfiltered collection.
    #[instrument(skip(self))]
    pub async fn retrieve(&mut self) {
        self.state.loading = true;
        let result = self.repo.list_paged().await;
        self.apply_retrieve(result);
    }

    /// Apply the outcome of a [`retrieve`](Self::retrieve) fetch.
    ///
    /// Responses are applied in the order this is called; with overlapping
    /// fetches the last one applied wins. A failure keeps whatever rows were
    /// already loaded.
    pub fn apply_retrieve(&mut self, result: Result<PagedResult<Student>>) {
        match result {
            Ok(paged) => {
                self.load(paged);
                self.clear_selection();
                self.state.message.clear();
            }
            Err(err) => {
                error!(error = %err, "Retrieve failed");
                self.state.message = LOAD_FAILED.to_string();
            }
        }
        self.state.loading = false;
    }

    /// Search the backend by name. A blank query reloads everything.
    #[instrument(skip(self))]
    pub async fn search(&mut self, query: &str) {
        self.state.search = query.to_string();
        self.clear_selection();
        self.state.message.clear();

        let query = query.trim();
        if query.is_empty() {
            self.retrieve().await;
            return;
        }

        self.state.loading = true;
        let result = self.repo.list_paged_by_name(query).await;
        self.apply_search(query, result);
    }

    /// Apply the outcome of a [`search`](Self::search) fetch for `query`.
    pub fn apply_search(&mut self, query: &str, result: Result<PagedResult<Student>>) {
        match result {
            Ok(paged) => {
                self.load(paged);
                if self.state.students.is_empty() {
                    self.state.message = no_results(query);
                }
            }
            Err(err) => {
                error!(error = %err, "Search failed");
                self.state.message = SEARCH_FAILED.to_string();
            }
        }
        self.state.loading = false;
    }

    /// Clear the selection, message, search and filter, then reload.
    pub async fn refresh(&mut self) {
        self.clear_selection();
        self.state.message.clear();
        self.state.search.clear();
        self.apply_local_filter("");
        self.retrieve().await;
    }

    /// Filter the loaded rows without asking the backend.
    pub fn apply_local_filter(&mut self, text: &str) {
        self.state.filter = text.trim().to_lowercase();
        self.state.view_page = 0;
    }

    fn filtered(&self) -> impl Iterator<Item = &Student> {
        let filter = self.state.filter.as_str();
        self.state
            .students
            .iter()
            .filter(move |student| filter.is_empty() || student.matches(filter))
    }

    /// Number of loaded rows passing the filter.
    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }

    /// The filtered rows on the current view page.
    pub fn visible_rows(&self) -> Vec<&Student> {
        let page_size = self.state.page_size.max(1) as usize;
        self.filtered()
            .skip(self.state.view_page.saturating_mul(page_size))
            .take(page_size)
            .collect()
    }

    /// Record a paginator change.
    ///
    /// Only moves over the rows already loaded; no request is made for the
    /// new page. The 1-based page number saturates at `u32::MAX`.
    pub fn on_page_change(&mut self, page_index: usize, page_size: u32) {
        self.state.page = u32::try_from(page_index)
            .ok()
            .and_then(|index| index.checked_add(1))
            .unwrap_or(u32::MAX);
        self.state.page_size = page_size;
        self.state.view_page = page_index;
        debug!(page = self.state.page, page_size, "Page changed");
    }

    pub fn select(&mut self, student: &Student, index: usize) {
        self.state.selected = Some(student.clone());
        self.state.selected_index = Some(index);
        self.state.message.clear();
    }

    /// Open the editor for `student`, reloading if it reports a save.
    pub async fn edit(&mut self, student: &Student) -> Option<EditorOutcome> {
        self.launch(EditorContext::edit(student.clone())).await
    }

    /// Open an empty editor, reloading if it reports a save.
    pub async fn open_add(&mut self) -> Option<EditorOutcome> {
        self.launch(EditorContext::add()).await
    }

    async fn launch(&mut self, context: EditorContext) -> Option<EditorOutcome> {
        let outcome = self.launcher.open(context).await;
        if outcome.is_some() {
            self.retrieve().await;
        }
        outcome
    }

    /// Delete `student` and reload. Failures are only logged.
    #[instrument(skip(self, student), fields(id = ?student.id))]
    pub async fn remove(&mut self, student: &Student) {
        let Some(id) = student.id else {
            return;
        };

        match self.repo.delete(id).await {
            Ok(_) => self.retrieve().await,
            Err(err) => error!(%id, error = %err, "Delete failed"),
        }
    }

    pub fn track_key(index: usize, student: &Student) -> RowKey {
        student.id.map_or(RowKey::Index(index), RowKey::Id)
    }

    fn load(&mut self, paged: PagedResult<Student>) {
        let page = paged.into_page();
        self.state.students = page.items;
        self.state.total_count = page.total_count;
        self.state.page = page.page;
        self.state.page_size = page.page_size;
        self.state.view_page = 0;
    }

    fn clear_selection(&mut self) {
        self.state.selected = None;
        self.state.selected_index = None;
    }
}
