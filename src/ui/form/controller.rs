use crate::api::{ApiError, Request, Response, INVALID_FORMAT_MESSAGE};
use crate::model::StudentId;
use crate::ui::mvi::{dispatch_mvi, Reducer};
use crate::ui::phase::{ErrorKind, ViewError};
use crate::ui::route::Route;
use crate::ui::ticket::{Pending, RequestTracker, Ticket};

use super::intent::FormIntent;
use super::reducer::FormReducer;
use super::state::{FormMode, FormState};

/// Drives the add and edit forms.
///
/// A create form needs no fetch. An edit form loads the record first and
/// fills its fields from it. Both validate required fields before sending.
#[derive(Debug)]
pub struct FormController {
    mode: FormMode,
    state: FormState,
    requests: RequestTracker,
}

impl FormController {
    pub fn create() -> Self {
        Self::with_mode(FormMode::Create)
    }

    pub fn edit(id: StudentId) -> Self {
        Self::with_mode(FormMode::Edit { id })
    }

    fn with_mode(mode: FormMode) -> Self {
        Self {
            mode,
            state: FormState::default(),
            requests: RequestTracker::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn mount_id(&self) -> u64 {
        self.requests.mount()
    }

    pub fn mount(&mut self) -> Option<Pending> {
        self.dispatch(FormIntent::Opened {
            mode: self.mode.clone(),
        });
        match self.mode.clone() {
            FormMode::Create => None,
            FormMode::Edit { id } => self.begin(Request::Get { id }),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.dispatch(FormIntent::SetName(name.into()));
    }

    pub fn set_student_code(&mut self, code: impl Into<String>) {
        self.dispatch(FormIntent::SetStudentCode(code.into()));
    }

    pub fn set_active(&mut self, active: bool) {
        self.dispatch(FormIntent::SetActive(active));
    }

    /// Submit the current fields.
    ///
    /// Returns `None` without touching the network while a request is in
    /// flight or when a required field is blank.
    pub fn submit(&mut self) -> Option<Pending> {
        if self.requests.in_flight() {
            return None;
        }

        let draft = self.state.fields.clone();
        if let Err(err) = draft.validate() {
            self.dispatch(FormIntent::Failed { error: err.into() });
            return None;
        }

        let request = match self.mode.clone() {
            FormMode::Create => Request::Create { draft },
            FormMode::Edit { id } => Request::Update { id, draft },
        };
        self.begin(request)
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(FormIntent::DismissError);
    }

    pub fn cancel_route(&self) -> Route {
        Route::List
    }

    /// Navigation requested by a successful submit, consumed once.
    pub fn take_navigation(&mut self) -> Option<Route> {
        self.state.navigate_to.take()
    }

    pub fn finish(&mut self, ticket: Ticket, result: Result<Response, ApiError>) -> bool {
        if !self.requests.accept(ticket) {
            return false;
        }

        let intent = match result {
            Ok(Response::Fetched(student)) => FormIntent::Loaded { student },
            Ok(Response::Created(student)) | Ok(Response::Updated(student)) => {
                tracing::info!(id = %student.id, name = %student.name, "Student saved");
                FormIntent::Saved
            }
            Ok(other) => {
                tracing::warn!(?other, "Unexpected response for form screen");
                FormIntent::Failed {
                    error: ViewError::new(ErrorKind::Format, INVALID_FORMAT_MESSAGE),
                }
            }
            Err(err) => FormIntent::Failed {
                error: ViewError::from(&err),
            },
        };
        self.dispatch(intent);
        true
    }

    pub fn dispatch(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, state, FormReducer, intent);
    }

    fn begin(&mut self, request: Request) -> Option<Pending> {
        let pending = self.requests.issue(request)?;
        self.dispatch(FormIntent::Started);
        Some(pending)
    }
}
