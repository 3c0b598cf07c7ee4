use crate::model::{StudentDraft, StudentId};
use crate::ui::mvi::UiState;
use crate::ui::phase::{Phase, ViewError};
use crate::ui::route::Route;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: StudentId,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub mode: FormMode,
    pub fields: StudentDraft,
    pub phase: Phase,
    /// Set once a submission succeeds; the app follows it.
    pub navigate_to: Option<Route>,
}

impl UiState for FormState {}

impl FormState {
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// The submit button is disabled while a request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.phase.error()
    }

    pub fn submit_label(&self) -> &'static str {
        match (&self.mode, self.is_loading()) {
            (FormMode::Create, false) => "Add Student",
            (FormMode::Create, true) => "Adding...",
            (FormMode::Edit { .. }, false) => "Update Student",
            (FormMode::Edit { .. }, true) => "Updating...",
        }
    }
}
