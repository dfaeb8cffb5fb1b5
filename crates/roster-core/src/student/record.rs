//! Student record types.

use serde::{Deserialize, Serialize};

use crate::types::StudentId;

/// A student as the backend returns it.
///
/// Every field is optional on the wire; a record without an `id` has not
/// been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Assigned by the backend on creation, immutable afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StudentId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Free-form categorical value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl Student {
    /// Build a persisted student from its parts.
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        email: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            email: Some(email.into()),
            gender: Some(gender.into()),
        }
    }

    /// Returns true if the record has not been persisted.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Case-insensitive substring match across name, email and gender.
    ///
    /// `needle` is expected to be lower-cased already; an empty needle
    /// matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.gender]
            .into_iter()
            .any(|field| {
                field
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(needle)
            })
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
    pub gender: String,
}

impl StudentPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            gender: gender.into(),
        }
    }

    /// Attach an identifier, producing the persisted record.
    pub fn into_student(self, id: StudentId) -> Student {
        Student::new(id, self.name, self.email, self.gender)
    }
}

/// The in-progress copy of a student being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    /// Carried through for update routing; never sent in a body.
    pub id: Option<StudentId>,
    pub name: String,
    pub email: String,
    pub gender: String,
}

impl StudentDraft {
    /// Hydrate field by field, defaulting each missing field to empty.
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone().unwrap_or_default(),
            email: student.email.clone().unwrap_or_default(),
            gender: student.gender.clone().unwrap_or_default(),
        }
    }

    /// Payload with trimmed name and email; gender is passed as-is.
    pub fn to_payload(&self) -> StudentPayload {
        StudentPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            gender: self.gender.clone(),
        }
    }

    pub fn to_student(&self) -> Student {
        Student {
            id: self.id,
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            gender: Some(self.gender.clone()),
        }
    }
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        Self::from_student(student)
    }
}
