//! Add/edit overlay for a single student.
//!
//! An editor is opened with an [`EditorContext`] and hands back an
//! [`EditorHandle`]. The opener awaits the handle to learn whether anything
//! was saved; the editor sends its outcome exactly once, when it closes.

use async_trait::async_trait;
use tokio::sync::{Mutex, oneshot};
use tracing::{debug, error, instrument};

use roster_core::{Student, StudentDraft, StudentId, StudentPayload};

use crate::SharedRepository;
use crate::form::{FieldEdits, FormHandle};
use crate::validation::validate_payload;

pub const ADD_TITLE: &str = "Add Student";
pub const EDIT_TITLE: &str = "Edit Student";

pub const FIX_ERRORS_BEFORE_SUBMIT: &str = "Please fix validation errors before submitting.";
pub const UPDATED: &str = "Student updated successfully!";
pub const UPDATE_FAILED: &str = "Update failed. Please try again.";
pub const CREATED: &str = "Student created successfully!";
pub const CREATE_FAILED: &str = "Create failed. Please try again.";

/// Whether the editor creates a new student or changes an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    Edit,
}

/// What the opener passes to a new editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorContext {
    pub title: Option<String>,
    pub student: Option<Student>,
}

impl EditorContext {
    pub fn add() -> Self {
        Self {
            title: Some(ADD_TITLE.to_string()),
            student: None,
        }
    }

    pub fn edit(student: Student) -> Self {
        Self {
            title: Some(EDIT_TITLE.to_string()),
            student: Some(student),
        }
    }

    /// A context carrying a student opens in edit mode.
    pub fn mode(&self) -> EditorMode {
        if self.student.is_some() {
            EditorMode::Edit
        } else {
            EditorMode::Add
        }
    }
}

/// The result an editor sends back when it closes after a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// The draft as it was submitted, including its id.
    Updated(Student),
    /// The student returned by the backend.
    Created(Student),
}

impl EditorOutcome {
    pub fn student(&self) -> &Student {
        match self {
            EditorOutcome::Updated(student) | EditorOutcome::Created(student) => student,
        }
    }
}

/// Receives the outcome of an open editor.
#[derive(Debug)]
pub struct EditorHandle {
    rx: oneshot::Receiver<Option<EditorOutcome>>,
}

impl EditorHandle {
    /// Wait for the editor to close.
    ///
    /// Returns `None` when the editor was dismissed without a result or
    /// dropped without being closed.
    pub async fn closed(self) -> Option<EditorOutcome> {
        self.rx.await.ok().flatten()
    }
}

/// The add/edit workflow for one student.
pub struct StudentEditor {
    repo: SharedRepository,
    mode: EditorMode,
    title: String,
    draft: StudentDraft,
    submitted: bool,
    message: String,
    reply: Option<oneshot::Sender<Option<EditorOutcome>>>,
}

impl StudentEditor {
    /// Open an editor. The mode is fixed here from the context.
    pub fn open(repo: SharedRepository, context: EditorContext) -> (Self, EditorHandle) {
        let (tx, rx) = oneshot::channel();
        let mode = context.mode();
        let draft = context
            .student
            .as_ref()
            .map(StudentDraft::from_student)
            .unwrap_or_default();
        let title = context.title.unwrap_or_else(|| match mode {
            EditorMode::Add => ADD_TITLE.to_string(),
            EditorMode::Edit => EDIT_TITLE.to_string(),
        });

        let editor = Self {
            repo,
            mode,
            title,
            draft,
            submitted: false,
            message: String::new(),
            reply: Some(tx),
        };
        (editor, EditorHandle { rx })
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn draft(&self) -> &StudentDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut StudentDraft {
        &mut self.draft
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Returns true until [`close`](Self::close) has been called.
    pub fn is_open(&self) -> bool {
        self.reply.is_some()
    }

    /// Validate the draft and create or update the student.
    ///
    /// On success the editor closes with the outcome. On failure it stays
    /// open and `message` says what went wrong.
    #[instrument(skip(self, form), fields(mode = ?self.mode))]
    pub async fn save(&mut self, form: Option<&mut dyn FormHandle>) {
        self.message.clear();

        if let Some(form) = form {
            if form.is_invalid() {
                form.mark_all_as_touched();
                self.message = FIX_ERRORS_BEFORE_SUBMIT.to_string();
                return;
            }
        }

        let payload = self.draft.to_payload();
        if let Err(err) = validate_payload(&payload) {
            debug!(%err, "Draft rejected");
            self.message = err.to_string();
            return;
        }

        match (self.mode, self.draft.id) {
            (EditorMode::Edit, Some(id)) => self.submit_update(id, &payload).await,
            _ => self.submit_create(&payload).await,
        }
    }

    async fn submit_update(&mut self, id: StudentId, payload: &StudentPayload) {
        match self.repo.update(id, payload).await {
            Ok(response) => {
                self.submitted = true;
                self.message = response.message().unwrap_or(UPDATED).to_string();
                let student = self.draft.to_student();
                self.close(Some(EditorOutcome::Updated(student)));
            }
            Err(err) => {
                error!(%id, error = %err, "Update failed");
                self.submitted = false;
                self.message = err.server_message().unwrap_or(UPDATE_FAILED).to_string();
            }
        }
    }

    async fn submit_create(&mut self, payload: &StudentPayload) {
        match self.repo.create(payload).await {
            Ok(created) => {
                self.submitted = true;
                if let Some(id) = created.id {
                    self.draft.id = Some(id);
                }
                self.message = CREATED.to_string();
                self.close(Some(EditorOutcome::Created(created)));
            }
            Err(err) => {
                error!(error = %err, "Create failed");
                self.submitted = false;
                self.message = err.server_message().unwrap_or(CREATE_FAILED).to_string();
            }
        }
    }

    /// Dismiss the editor, sending `result` to the opener.
    ///
    /// Only the first call sends anything.
    pub fn close(&mut self, result: Option<EditorOutcome>) {
        if let Some(tx) = self.reply.take() {
            // The opener may have stopped listening.
            let _ = tx.send(result);
        }
    }

    /// Start over with an empty add form.
    pub fn reset(&mut self) {
        self.submitted = false;
        self.message.clear();
        self.mode = EditorMode::Add;
        self.draft = StudentDraft::default();
    }
}

/// Opens an editor for a context and waits for it to close.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EditorLauncher: Send + Sync {
    async fn open(&self, context: EditorContext) -> Option<EditorOutcome>;
}

/// A launcher that fills the draft from fixed edits and saves immediately.
///
/// Used where there is no interactive overlay. A failed save dismisses the
/// editor without a result; its message is kept for the caller.
pub struct SubmittingLauncher {
    repo: SharedRepository,
    edits: FieldEdits,
    last_message: Mutex<Option<String>>,
}

impl SubmittingLauncher {
    pub fn new(repo: SharedRepository, edits: FieldEdits) -> Self {
        Self {
            repo,
            edits,
            last_message: Mutex::new(None),
        }
    }

    /// The message left by the most recent editor, if one was opened.
    pub async fn last_message(&self) -> Option<String> {
        self.last_message.lock().await.clone()
    }
}

#[async_trait]
impl EditorLauncher for SubmittingLauncher {
    async fn open(&self, context: EditorContext) -> Option<EditorOutcome> {
        let (mut editor, handle) = StudentEditor::open(self.repo.clone(), context);
        self.edits.apply_to_draft(editor.draft_mut());

        editor.save(None).await;
        *self.last_message.lock().await = Some(editor.message().to_string());

        if editor.is_open() {
            editor.close(None);
        }
        handle.closed().await
    }
}
