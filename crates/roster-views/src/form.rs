//! Form handles passed to `save` and `update`.

use std::collections::BTreeSet;

use validator::Validate;

use roster_core::{Student, StudentDraft};

use crate::validation::EMAIL_RE;

/// A form bound to the fields being edited.
///
/// Workflows consult it before doing anything else: an invalid form gets all
/// of its fields touched so per-field errors become visible.
pub trait FormHandle: Send {
    /// Returns true if any field fails its own validation.
    fn is_invalid(&self) -> bool;

    /// Mark every field as touched.
    fn mark_all_as_touched(&mut self);
}

/// The fields of a student form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Gender,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Gender];

    /// Field name as used in validation errors.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Gender => "gender",
        }
    }
}

/// Form data for adding or editing a student.
#[derive(Debug, Clone, Default, Validate)]
pub struct StudentForm {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(regex(path = *EMAIL_RE))]
    pub email: String,
    #[validate(length(min = 1))]
    pub gender: String,
    touched: BTreeSet<Field>,
}

impl StudentForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            gender: gender.into(),
            touched: BTreeSet::new(),
        }
    }

    /// Mark a single field as touched.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Touched fields that currently fail validation, in display order.
    pub fn visible_errors(&self) -> Vec<Field> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };
        let failing = errors.field_errors();

        Field::ALL
            .into_iter()
            .filter(|field| self.is_touched(*field) && failing.contains_key(field.as_str()))
            .collect()
    }
}

impl FormHandle for StudentForm {
    fn is_invalid(&self) -> bool {
        self.validate().is_err()
    }

    fn mark_all_as_touched(&mut self) {
        self.touched.extend(Field::ALL);
    }
}

/// Field values to overwrite, leaving `None` fields as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldEdits {
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
}

impl FieldEdits {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.gender.is_none()
    }

    pub fn apply_to_draft(&self, draft: &mut StudentDraft) {
        if let Some(name) = &self.name {
            draft.name = name.clone();
        }
        if let Some(email) = &self.email {
            draft.email = email.clone();
        }
        if let Some(gender) = &self.gender {
            draft.gender = gender.clone();
        }
    }

    pub fn apply_to_student(&self, student: &mut Student) {
        if let Some(name) = &self.name {
            student.name = Some(name.clone());
        }
        if let Some(email) = &self.email {
            student.email = Some(email.clone());
        }
        if let Some(gender) = &self.gender {
            student.gender = Some(gender.clone());
        }
    }
}

impl From<&StudentDraft> for StudentForm {
    fn from(draft: &StudentDraft) -> Self {
        Self::new(draft.name.clone(), draft.email.clone(), draft.gender.clone())
    }
}

impl From<&Student> for StudentForm {
    fn from(student: &Student) -> Self {
        Self::from(&StudentDraft::from_student(student))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_valid_email;

    #[test]
    fn valid_form() {
        let form = StudentForm::new("Alice", "alice@example.com", "Female");
        assert!(!form.is_invalid());
        assert!(form.visible_errors().is_empty());
    }

    #[test]
    fn errors_stay_hidden_until_touched() {
        let mut form = StudentForm::new("A", "not-an-email", "Female");
        assert!(form.is_invalid());
        assert!(form.visible_errors().is_empty());

        form.touch(Field::Email);
        assert_eq!(form.visible_errors(), vec![Field::Email]);

        form.mark_all_as_touched();
        assert_eq!(form.visible_errors(), vec![Field::Name, Field::Email]);
    }

    #[test]
    fn email_rule_matches_payload_check() {
        for email in ["alice@example", "alice@[127.0.0.1]", "al ice@example.com"] {
            let form = StudentForm::new("Alice", email, "Female");
            assert!(form.is_invalid(), "{email} should be rejected");
            assert!(!is_valid_email(email));
        }

        let form = StudentForm::new("Alice", "al+tag@mail.example.org", "Female");
        assert!(!form.is_invalid());
    }

    #[test]
    fn edits_only_touch_given_fields() {
        let edits = FieldEdits {
            email: Some("new@example.com".to_string()),
            ..FieldEdits::default()
        };
        let mut student = Student {
            name: Some("Alice".to_string()),
            ..Student::default()
        };
        edits.apply_to_student(&mut student);
        assert_eq!(student.name.as_deref(), Some("Alice"));
        assert_eq!(student.email.as_deref(), Some("new@example.com"));
        assert_eq!(student.gender, None);
        assert!(FieldEdits::default().is_empty());
    }

    #[test]
    fn from_student_defaults_missing_fields() {
        let form = StudentForm::from(&Student::default());
        assert_eq!(form.gender, "");
        assert!(form.is_invalid());
    }
}
