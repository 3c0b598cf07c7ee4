use crate::model::Student;
use crate::ui::mvi::Intent;
use crate::ui::phase::ViewError;

use super::state::FormMode;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// The screen was shown. A create form is ready at once.
    Opened { mode: FormMode },
    SetName(String),
    SetStudentCode(String),
    SetActive(bool),
    Started,
    /// The record being edited arrived; fills the fields.
    Loaded { student: Student },
    /// The server accepted the submission.
    Saved,
    Failed { error: ViewError },
    DismissError,
}

impl Intent for FormIntent {}
