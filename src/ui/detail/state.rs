use crate::model::Student;
use crate::ui::mvi::UiState;
use crate::ui::phase::{ErrorKind, Phase, ViewError};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub phase: Phase,
    pub student: Option<Student>,
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.phase.error()
    }

    /// The record is known to be absent, as opposed to unreachable.
    pub fn is_not_found(&self) -> bool {
        matches!(self.error(), Some(err) if err.kind == ErrorKind::NotFound)
            || (self.phase == Phase::Ready && self.student.is_none())
    }
}
