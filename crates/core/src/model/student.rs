use thiserror::Error;

use crate::model::ids::StudentId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudentError {
    #[error("student name cannot be empty")]
    EmptyName,

    #[error("student class cannot be empty")]
    EmptyClass,

    #[error("student id {0} is already on the roster")]
    DuplicateId(StudentId),
}

/// Unvalidated input from the creation dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub class: String,
}

impl StudentDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
        }
    }

    /// Returns true when both required fields are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.class.trim().is_empty()
    }

    /// Trim both fields and attach an id.
    ///
    /// # Errors
    ///
    /// Returns `StudentError::EmptyName` or `StudentError::EmptyClass` when a
    /// field is blank after trimming.
    pub fn validate(self, id: StudentId) -> Result<Student, StudentError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StudentError::EmptyName);
        }
        let class = self.class.trim();
        if class.is_empty() {
            return Err(StudentError::EmptyClass);
        }
        Ok(Student {
            id,
            name: name.to_owned(),
            class: class.to_owned(),
        })
    }
}

/// A student on the roster. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    name: String,
    class: String,
}

impl Student {
    /// Rehydrate a student exactly as it was stored.
    #[must_use]
    pub fn from_persisted(id: StudentId, name: String, class: String) -> Self {
        Self { id, name, class }
    }

    #[must_use]
    pub fn id(&self) -> StudentId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Case-insensitive substring match against name or class.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.class.to_lowercase().contains(needle)
    }
}
