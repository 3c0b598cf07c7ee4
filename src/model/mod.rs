//! Student records and the payloads sent to the collection resource.

mod student;

pub use student::{DraftError, Student, StudentDraft, StudentId};
