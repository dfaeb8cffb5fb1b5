//! Detail page for a single student.

use std::sync::Arc;

use tracing::{debug, error, instrument};

use roster_core::{Route, Student, StudentId, StudentPayload};

use crate::SharedRepository;
use crate::form::FormHandle;

pub const FIX_ERRORS_BEFORE_UPDATE: &str = "Please fix validation errors before updating.";
pub const DETAIL_UPDATED: &str = "The student was updated successfully!";

/// Moves the application to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Controller for viewing, updating and deleting one student.
pub struct StudentDetail {
    repo: SharedRepository,
    navigator: Arc<dyn Navigator>,
    view_mode: bool,
    route_id: Option<StudentId>,
    student: Student,
    message: String,
}

impl StudentDetail {
    /// A standalone page for the student named by `route`.
    pub fn page(repo: SharedRepository, navigator: Arc<dyn Navigator>, route: &Route) -> Self {
        Self {
            repo,
            navigator,
            view_mode: false,
            route_id: route.student_id(),
            student: Student::default(),
            message: String::new(),
        }
    }

    /// An embedded view of a student the caller already holds.
    ///
    /// The route is not consulted and nothing is fetched.
    pub fn view(repo: SharedRepository, navigator: Arc<dyn Navigator>, student: Student) -> Self {
        Self {
            repo,
            navigator,
            view_mode: true,
            route_id: None,
            student,
            message: String::new(),
        }
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    pub fn student_mut(&mut self) -> &mut Student {
        &mut self.student
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_view_mode(&self) -> bool {
        self.view_mode
    }

    /// Load the routed student. Does nothing in view mode or without an id.
    pub async fn activate(&mut self) {
        if self.view_mode {
            return;
        }
        self.message.clear();
        if let Some(id) = self.route_id {
            self.fetch(id).await;
        }
    }

    /// Replace the held student with the backend's copy. Failures are only
    /// logged.
    #[instrument(skip(self))]
    pub async fn fetch(&mut self, id: StudentId) {
        match self.repo.get(id).await {
            Ok(student) => {
                debug!(?student, "Fetched student");
                self.student = student;
            }
            Err(err) => error!(%id, error = %err, "Fetch failed"),
        }
    }

    /// Save the held student's fields.
    #[instrument(skip(self, form), fields(id = ?self.student.id))]
    pub async fn update(&mut self, form: Option<&mut dyn FormHandle>) {
        self.message.clear();

        if let Some(form) = form {
            if form.is_invalid() {
                form.mark_all_as_touched();
                self.message = FIX_ERRORS_BEFORE_UPDATE.to_string();
                return;
            }
        }

        let Some(id) = self.student.id else {
            error!("Missing student id for update.");
            return;
        };

        let payload = StudentPayload::new(
            self.student.name.as_deref().unwrap_or_default().trim(),
            self.student.email.as_deref().unwrap_or_default().trim(),
            self.student.gender.clone().unwrap_or_default(),
        );

        match self.repo.update(id, &payload).await {
            Ok(response) => {
                self.message = response.message().unwrap_or(DETAIL_UPDATED).to_string();
            }
            Err(err) => error!(%id, error = %err, "Update failed"),
        }
    }

    /// Delete the held student and go back to the list.
    #[instrument(skip(self), fields(id = ?self.student.id))]
    pub async fn delete(&mut self) {
        let Some(id) = self.student.id else {
            error!("Missing student id for delete.");
            return;
        };

        match self.repo.delete(id).await {
            Ok(response) => {
                debug!(response = ?response.as_value(), "Deleted student");
                self.navigator.navigate(Route::List);
            }
            Err(err) => error!(%id, error = %err, "Delete failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use mockall::predicate::eq;
    use roster_core::error::{Error, ProtocolError};
    use roster_core::{ApiResponse, MockStudentRepository};
    use tracing_test::traced_test;

    use super::*;
    use crate::form::StudentForm;

    #[derive(Default)]
    struct RecordingNavigator {
        routes: Mutex<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.routes.lock().unwrap().push(route);
        }
    }

    fn alice(id: u64) -> Student {
        Student::new(StudentId::new(id), "Alice", "alice@example.com", "Female")
    }

    fn page(repo: MockStudentRepository, route: Route) -> (StudentDetail, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let detail = StudentDetail::page(Arc::new(repo), navigator.clone(), &route);
        (detail, navigator)
    }

    fn view(repo: MockStudentRepository, student: Student) -> (StudentDetail, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let detail = StudentDetail::view(Arc::new(repo), navigator.clone(), student);
        (detail, navigator)
    }

    #[tokio::test]
    async fn page_fetches_routed_student() {
        let mut repo = MockStudentRepository::new();
        repo.expect_get()
            .with(eq(StudentId::new(3)))
            .times(1)
            .returning(|id| Ok(alice(id.get())));

        let (mut detail, _) = page(repo, Route::Detail(StudentId::new(3)));
        detail.activate().await;

        assert_eq!(detail.student(), &alice(3));
    }

    #[tokio::test]
    async fn fetch_failure_keeps_empty_record() {
        let mut repo = MockStudentRepository::new();
        repo.expect_get()
            .returning(|id| Err(ProtocolError::not_found(format!("{} not found", id)).into()));

        let (mut detail, _) = page(repo, Route::Detail(StudentId::new(3)));
        detail.activate().await;

        assert_eq!(detail.student(), &Student::default());
        assert_eq!(detail.message(), "");
    }

    #[tokio::test]
    async fn view_mode_never_fetches() {
        let mut repo = MockStudentRepository::new();
        repo.expect_get().never();

        let (mut detail, _) = view(repo, alice(4));
        detail.activate().await;
        assert!(detail.is_view_mode());
        assert_eq!(detail.student(), &alice(4));
    }

    #[tokio::test]
    async fn update_sends_trimmed_fields() {
        let mut repo = MockStudentRepository::new();
        repo.expect_update()
            .with(
                eq(StudentId::new(4)),
                eq(StudentPayload::new("Alicia", "alicia@example.com", " Female")),
            )
            .times(1)
            .returning(|_, _| Ok(ApiResponse::default()));

        let (mut detail, _) = view(repo, alice(4));
        let student = detail.student_mut();
        student.name = Some(" Alicia ".to_string());
        student.email = Some("alicia@example.com ".to_string());
        student.gender = Some(" Female".to_string());
        detail.update(None).await;

        assert_eq!(detail.message(), DETAIL_UPDATED);
    }

    #[tokio::test]
    async fn update_uses_server_message() {
        let mut repo = MockStudentRepository::new();
        repo.expect_update()
            .returning(|_, _| Ok(ApiResponse::with_message("Student was updated successfully.")));

        let (mut detail, _) = view(repo, alice(4));
        detail.update(None).await;
        assert_eq!(detail.message(), "Student was updated successfully.");
    }

    #[tokio::test]
    async fn invalid_form_blocks_update() {
        let mut repo = MockStudentRepository::new();
        repo.expect_update().never();

        let (mut detail, _) = view(repo, alice(4));
        let mut form = StudentForm::new("A", "alice@example.com", "Female");
        detail.update(Some(&mut form)).await;

        assert_eq!(detail.message(), FIX_ERRORS_BEFORE_UPDATE);
        assert!(!form.visible_errors().is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn update_without_id_logs_and_skips_backend() {
        let mut repo = MockStudentRepository::new();
        repo.expect_update().never();
        let (mut detail, _) = view(repo, Student::default());
        detail.update(None).await;

        assert_eq!(detail.message(), "");
        assert!(logs_contain("Missing student id for update."));
    }

    #[tokio::test]
    async fn update_failure_sets_no_message() {
        let mut repo = MockStudentRepository::new();
        repo.expect_update()
            .returning(|_, _| Err(Error::Protocol(ProtocolError::new(500, None, None))));
        let (mut detail, _) = view(repo, alice(4));
        detail.update(None).await;
        assert_eq!(detail.message(), "");
    }

    #[tokio::test]
    #[traced_test]
    async fn delete_without_id_logs_and_skips_backend() {
        let mut repo = MockStudentRepository::new();
        repo.expect_delete().never();

        let (mut detail, navigator) = page(repo, Route::Detail(StudentId::new(8)));
        detail.delete().await;

        assert!(navigator.routes.lock().unwrap().is_empty());
        assert!(logs_contain("Missing student id for delete."));
    }

    #[tokio::test]
    async fn delete_navigates_to_list() {
        let mut repo = MockStudentRepository::new();
        repo.expect_delete()
            .with(eq(StudentId::new(4)))
            .times(1)
            .returning(|_| Ok(ApiResponse::default()));

        let (mut detail, navigator) = view(repo, alice(4));
        detail.delete().await;

        assert_eq!(*navigator.routes.lock().unwrap(), vec![Route::List]);
    }

    #[tokio::test]
    async fn delete_failure_stays_put() {
        let mut repo = MockStudentRepository::new();
        repo.expect_delete()
            .returning(|_| Err(Error::Protocol(ProtocolError::new(500, None, None))));

        let (mut detail, navigator) = view(repo, alice(4));
        detail.delete().await;

        assert!(navigator.routes.lock().unwrap().is_empty());
    }
}
