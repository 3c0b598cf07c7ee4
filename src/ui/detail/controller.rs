use crate::api::{ApiError, Request, Response, INVALID_FORMAT_MESSAGE};
use crate::model::StudentId;
use crate::ui::mvi::{dispatch_mvi, Reducer};
use crate::ui::phase::{ErrorKind, ViewError};
use crate::ui::route::Route;
use crate::ui::ticket::{Pending, RequestTracker, Ticket};

use super::intent::DetailIntent;
use super::reducer::DetailReducer;
use super::state::DetailState;

#[derive(Debug)]
pub struct DetailController {
    id: StudentId,
    state: DetailState,
    requests: RequestTracker,
}

impl DetailController {
    pub fn new(id: StudentId) -> Self {
        Self {
            id,
            state: DetailState::default(),
            requests: RequestTracker::new(),
        }
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn mount_id(&self) -> u64 {
        self.requests.mount()
    }

    pub fn mount(&mut self) -> Option<Pending> {
        self.refresh()
    }

    pub fn refresh(&mut self) -> Option<Pending> {
        let pending = self.requests.issue(Request::Get {
            id: self.id.clone(),
        })?;
        self.dispatch(DetailIntent::Started);
        Some(pending)
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(DetailIntent::DismissError);
    }

    /// Where "Edit" leads; only offered once the record is loaded.
    pub fn edit_route(&self) -> Option<Route> {
        self.state
            .student
            .as_ref()
            .map(|student| Route::Edit(student.id.clone()))
    }

    pub fn back_route(&self) -> Route {
        Route::List
    }

    pub fn finish(&mut self, ticket: Ticket, result: Result<Response, ApiError>) -> bool {
        if !self.requests.accept(ticket) {
            return false;
        }

        let intent = match result {
            Ok(Response::Fetched(student)) | Ok(Response::Updated(student)) => {
                DetailIntent::Loaded { student }
            }
            Ok(other) => {
                tracing::warn!(?other, "Unexpected response for detail screen");
                DetailIntent::Failed {
                    error: ViewError::new(ErrorKind::Format, INVALID_FORMAT_MESSAGE),
                }
            }
            Err(err) => DetailIntent::Failed {
                error: ViewError::from(&err),
            },
        };
        self.dispatch(intent);
        true
    }

    pub fn dispatch(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, state, DetailReducer, intent);
    }
}
