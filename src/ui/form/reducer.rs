use crate::model::StudentDraft;
use crate::ui::mvi::Reducer;
use crate::ui::phase::Phase;
use crate::ui::route::Route;

use super::intent::FormIntent;
use super::state::{FormMode, FormState};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Opened { mode } => {
                let phase = match mode {
                    FormMode::Create => Phase::Ready,
                    FormMode::Edit { .. } => Phase::Idle,
                };
                state = FormState {
                    mode,
                    fields: StudentDraft::default(),
                    phase,
                    navigate_to: None,
                };
            }
            FormIntent::SetName(name) => state.fields.name = name,
            FormIntent::SetStudentCode(code) => state.fields.student_code = code,
            FormIntent::SetActive(active) => state.fields.is_active = active,
            FormIntent::Started => state.phase = Phase::Loading,
            FormIntent::Loaded { student } => {
                state.fields = StudentDraft::from(&student);
                state.phase = Phase::Ready;
            }
            FormIntent::Saved => {
                state.phase = Phase::Ready;
                state.navigate_to = Some(Route::List);
            }
            // Field values stay as typed so the user can fix and resubmit.
            FormIntent::Failed { error } => state.phase = Phase::Error(error),
            FormIntent::DismissError => state.phase = state.phase.dismissed(),
        }
        state
    }
}
