use crate::store::{RecordStore, StoredStudent};
use crate::ui::mvi::UiState;
use crate::ui::phase::{Phase, ViewError};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub phase: Phase,
    pub store: RecordStore,
    /// Show only active students. Purely a view over `store`.
    pub active_only: bool,
}

impl UiState for ListState {}

impl ListState {
    /// Rows to render, in store order.
    pub fn visible(&self) -> Vec<&StoredStudent> {
        self.store.visible(self.active_only).collect()
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Whether buttons that issue requests should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.phase.error()
    }

    pub fn selected_count(&self) -> usize {
        self.store.selected_count()
    }
}
