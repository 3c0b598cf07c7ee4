use crate::api::{ApiError, Request, Response, INVALID_FORMAT_MESSAGE};
use crate::model::{StudentDraft, StudentId};
use crate::ui::confirm::{Confirm, DELETE_PROMPT};
use crate::ui::mvi::{dispatch_mvi, Reducer};
use crate::ui::phase::{ErrorKind, ViewError};
use crate::ui::ticket::{Pending, RequestTracker, Ticket};

use super::intent::ListIntent;
use super::reducer::ListReducer;
use super::state::ListState;

/// Owns the list screen's state and its single in-flight request.
#[derive(Debug, Default)]
pub struct ListController {
    state: ListState,
    requests: RequestTracker,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn mount_id(&self) -> u64 {
        self.requests.mount()
    }

    /// First fetch when the screen is shown.
    pub fn mount(&mut self) -> Option<Pending> {
        self.refresh()
    }

    pub fn refresh(&mut self) -> Option<Pending> {
        self.begin(Request::List)
    }

    /// Create a record; the returned one is appended once the server confirms.
    pub fn create(&mut self, draft: StudentDraft) -> Option<Pending> {
        if self.requests.in_flight() {
            return None;
        }
        if let Err(err) = draft.validate() {
            self.dispatch(ListIntent::Failed { error: err.into() });
            return None;
        }
        self.begin(Request::Create { draft })
    }

    /// Replace a record; the store changes only once the server confirms.
    pub fn update(&mut self, id: StudentId, draft: StudentDraft) -> Option<Pending> {
        if self.requests.in_flight() {
            return None;
        }
        if let Err(err) = draft.validate() {
            self.dispatch(ListIntent::Failed { error: err.into() });
            return None;
        }
        self.begin(Request::Update { id, draft })
    }

    /// Delete a listed record after confirmation. Declining leaves everything
    /// untouched; an id that is not in the store is reported without asking.
    pub fn delete(&mut self, id: StudentId, confirm: &impl Confirm) -> Option<Pending> {
        if self.requests.in_flight() {
            return None;
        }
        if self.state.store.get(&id).is_none() {
            let missing = ApiError::NotFound { id };
            self.dispatch(ListIntent::Failed {
                error: ViewError::from(&missing),
            });
            return None;
        }
        if !confirm.confirm(DELETE_PROMPT) {
            return None;
        }
        self.begin(Request::Delete { id })
    }

    pub fn toggle_active_only(&mut self) {
        self.dispatch(ListIntent::ToggleActiveOnly);
    }

    pub fn toggle_selected(&mut self, id: StudentId) {
        self.dispatch(ListIntent::ToggleSelected { id });
    }

    pub fn toggle_row(&mut self, index: usize) {
        self.dispatch(ListIntent::ToggleRow { index });
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(ListIntent::DismissError);
    }

    /// Apply the result of a request issued by this controller.
    ///
    /// Returns `false` when the ticket is stale and nothing changed.
    pub fn finish(&mut self, ticket: Ticket, result: Result<Response, ApiError>) -> bool {
        if !self.requests.accept(ticket) {
            return false;
        }

        let intent = match result {
            Ok(Response::Listed(students)) => ListIntent::Loaded { students },
            Ok(Response::Created(student)) => ListIntent::Created { student },
            Ok(Response::Updated(student)) => ListIntent::Updated { student },
            Ok(Response::Deleted(id)) => ListIntent::Deleted { id },
            Ok(other) => {
                tracing::warn!(?other, "Unexpected response for list screen");
                ListIntent::Failed {
                    error: ViewError::new(ErrorKind::Format, INVALID_FORMAT_MESSAGE),
                }
            }
            Err(err) => ListIntent::Failed {
                error: ViewError::from(&err),
            },
        };
        self.dispatch(intent);
        true
    }

    pub fn dispatch(&mut self, intent: ListIntent) {
        dispatch_mvi!(self, state, ListReducer, intent);
    }

    fn begin(&mut self, request: Request) -> Option<Pending> {
        let pending = self.requests.issue(request)?;
        self.dispatch(ListIntent::Started);
        Some(pending)
    }
}
