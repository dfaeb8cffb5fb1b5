//! Filesystem storage for the file-backed repository.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use roster_core::Result;
use roster_core::error::{Error, ProtocolError, TransportError};
use roster_core::{Student, StudentId, StudentPayload};

fn map_io(err: std::io::Error) -> Error {
    Error::Transport(TransportError::from(err))
}

fn map_json(err: serde_json::Error) -> Error {
    Error::Transport(TransportError::from(err))
}

fn not_found(id: StudentId) -> Error {
    Error::Protocol(ProtocolError::not_found(format!(
        "Student with id={} not found",
        id
    )))
}

/// The on-disk document holding the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StudentsFile {
    /// Next identifier to hand out.
    pub next_id: u64,
    /// When the collection last changed.
    pub updated_at: DateTime<Utc>,
    pub students: Vec<Student>,
}

impl Default for StudentsFile {
    fn default() -> Self {
        Self {
            next_id: 1,
            updated_at: Utc::now(),
            students: Vec::new(),
        }
    }
}

/// Filesystem-backed storage for the student collection.
///
/// All reads take a shared lock and all writes an exclusive lock on
/// `students.lock`, so separate processes may share one root.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the collection document path.
    fn students_path(&self) -> PathBuf {
        self.root.join("students.json")
    }

    /// Get the lock file path.
    fn lock_path(&self) -> PathBuf {
        self.root.join("students.lock")
    }

    fn open_lock(&self) -> Result<File> {
        fs::create_dir_all(&self.root).map_err(map_io)?;
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(map_io)
    }

    fn load(&self) -> Result<StudentsFile> {
        let path = self.students_path();

        if !path.exists() {
            return Ok(StudentsFile::default());
        }

        let content = fs::read_to_string(&path).map_err(map_io)?;
        serde_json::from_str(&content).map_err(map_json)
    }

    fn save(&self, doc: &StudentsFile) -> Result<()> {
        let path = self.students_path();
        let content = serde_json::to_string_pretty(doc).map_err(map_json)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(map_io)?;
        fs::rename(&temp_path, &path).map_err(map_io)?;

        Ok(())
    }

    /// Run `f` against a snapshot of the collection under a shared lock.
    fn read<T>(&self, f: impl FnOnce(&StudentsFile) -> Result<T>) -> Result<T> {
        let lock = self.open_lock()?;
        lock.lock_shared().map_err(map_io)?;

        let result = self.load().and_then(|doc| f(&doc));

        lock.unlock().map_err(map_io)?;
        result
    }

    /// Run `f` against the collection under an exclusive lock, persisting
    /// the document if `f` succeeds.
    fn write<T>(&self, f: impl FnOnce(&mut StudentsFile) -> Result<T>) -> Result<T> {
        let lock = self.open_lock()?;
        lock.lock_exclusive().map_err(map_io)?;

        let result = self.load().and_then(|mut doc| {
            let value = f(&mut doc)?;
            doc.updated_at = Utc::now();
            self.save(&doc)?;
            Ok(value)
        });

        lock.unlock().map_err(map_io)?;
        result
    }

    // ========================================================================
    // Record Operations
    // ========================================================================

    /// All students whose name contains `name` (case-insensitive), or every
    /// student when `name` is `None`.
    #[instrument(skip(self))]
    pub fn list(&self, name: Option<&str>) -> Result<Vec<Student>> {
        let needle = name.map(str::to_lowercase);

        self.read(|doc| {
            Ok(doc
                .students
                .iter()
                .filter(|student| match &needle {
                    Some(needle) => student
                        .name
                        .as_deref()
                        .unwrap_or_default()
                        .to_lowercase()
                        .contains(needle.as_str()),
                    None => true,
                })
                .cloned()
                .collect())
        })
    }

    #[instrument(skip(self))]
    pub fn get(&self, id: StudentId) -> Result<Student> {
        self.read(|doc| {
            doc.students
                .iter()
                .find(|student| student.id == Some(id))
                .cloned()
                .ok_or_else(|| not_found(id))
        })
    }

    #[instrument(skip(self, payload))]
    pub fn create(&self, payload: &StudentPayload) -> Result<Student> {
        let student = self.write(|doc| {
            let id = StudentId::new(doc.next_id);
            doc.next_id += 1;

            let student = payload.clone().into_student(id);
            doc.students.push(student.clone());
            Ok(student)
        })?;

        debug!(id = ?student.id, "Created student");

        Ok(student)
    }

    #[instrument(skip(self, payload))]
    pub fn update(&self, id: StudentId, payload: &StudentPayload) -> Result<()> {
        self.write(|doc| {
            let slot = doc
                .students
                .iter_mut()
                .find(|student| student.id == Some(id))
                .ok_or_else(|| not_found(id))?;

            *slot = payload.clone().into_student(id);
            Ok(())
        })?;

        debug!(%id, "Updated student");

        Ok(())
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: StudentId) -> Result<()> {
        self.write(|doc| {
            let before = doc.students.len();
            doc.students.retain(|student| student.id != Some(id));

            if doc.students.len() == before {
                return Err(not_found(id));
            }
            Ok(())
        })?;

        debug!(%id, "Deleted student");

        Ok(())
    }

    /// Remove every student, returning how many there were.
    ///
    /// Identifiers keep counting up; they are never reused.
    #[instrument(skip(self))]
    pub fn delete_all(&self) -> Result<usize> {
        let removed = self.write(|doc| {
            let removed = doc.students.len();
            doc.students.clear();
            Ok(removed)
        })?;

        debug!(removed, "Deleted all students");

        Ok(removed)
    }
}
