use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Server-assigned record identifier.
///
/// Numeric identifiers are accepted on input and kept as their decimal text,
/// so both document-store and auto-increment backends map onto one type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Ok(Self(text)),
            RawId::Number(number) => Ok(Self(number.to_string())),
        }
    }
}

/// A student record as held by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawStudent")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub student_code: String,
    pub is_active: bool,
}

/// Wire shape accepted on input. `id` wins over `_id` when both are present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStudent {
    #[serde(default)]
    id: Option<StudentId>,
    #[serde(default, rename = "_id")]
    object_id: Option<StudentId>,
    name: String,
    student_code: String,
    #[serde(default)]
    is_active: bool,
}

impl TryFrom<RawStudent> for Student {
    type Error = String;

    fn try_from(raw: RawStudent) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .or(raw.object_id)
            .ok_or_else(|| "student record has no identifier".to_string())?;
        Ok(Self {
            id,
            name: raw.name,
            student_code: raw.student_code,
            is_active: raw.is_active,
        })
    }
}

/// Errors raised by client-side required-field checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Name is required")]
    MissingName,

    #[error("Student code is required")]
    MissingStudentCode,
}

/// Create/update payload: the editable fields of a record and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    pub student_code: String,
    pub is_active: bool,
}

impl Default for StudentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            student_code: String::new(),
            is_active: true,
        }
    }
}

impl StudentDraft {
    pub fn new(name: impl Into<String>, student_code: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            student_code: student_code.into(),
            is_active,
        }
    }

    /// Checks required fields. Whitespace-only text counts as missing.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.student_code.trim().is_empty() {
            return Err(DraftError::MissingStudentCode);
        }
        Ok(())
    }
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            student_code: student.student_code.clone(),
            is_active: student.is_active,
        }
    }
}
