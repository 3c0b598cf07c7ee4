use crate::model::{Student, StudentId};
use crate::ui::mvi::Intent;
use crate::ui::phase::ViewError;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// A request was issued.
    Started,
    /// The collection arrived; replaces the store.
    Loaded { students: Vec<Student> },
    /// The server created a record.
    Created { student: Student },
    /// The server accepted an update.
    Updated { student: Student },
    /// The server confirmed a delete.
    Deleted { id: StudentId },
    /// A request failed or a draft was rejected locally.
    Failed { error: ViewError },
    ToggleActiveOnly,
    ToggleSelected { id: StudentId },
    /// Toggle selection of the `index`-th row currently shown.
    ToggleRow { index: usize },
    DismissError,
}

impl Intent for ListIntent {}
