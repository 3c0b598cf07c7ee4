use crate::ui::mvi::Reducer;
use crate::ui::phase::{ErrorKind, Phase};

use super::intent::DetailIntent;
use super::state::DetailState;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Started => DetailState {
                phase: Phase::Loading,
                ..state
            },
            DetailIntent::Loaded { student } => DetailState {
                phase: Phase::Ready,
                student: Some(student),
            },
            DetailIntent::Failed { error } => {
                // A record that is gone must not keep showing stale fields.
                let student = if error.kind == ErrorKind::NotFound {
                    None
                } else {
                    state.student
                };
                DetailState {
                    phase: Phase::Error(error),
                    student,
                }
            }
            DetailIntent::DismissError => DetailState {
                phase: state.phase.dismissed(),
                ..state
            },
        }
    }
}
