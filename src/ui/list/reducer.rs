use crate::ui::mvi::Reducer;
use crate::ui::phase::Phase;

use super::intent::ListIntent;
use super::state::ListState;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Started => {
                state.phase = Phase::Loading;
            }
            ListIntent::Loaded { students } => {
                state.store.replace_all(students);
                state.phase = Phase::Ready;
            }
            ListIntent::Created { student } => {
                state.store.append(student);
                state.phase = Phase::Ready;
            }
            ListIntent::Updated { student } => {
                // Unknown id: the record moved or vanished server-side; leave the store alone.
                state.store.update(student);
                state.phase = Phase::Ready;
            }
            ListIntent::Deleted { id } => {
                state.store.remove(&id);
                state.phase = Phase::Ready;
            }
            ListIntent::Failed { error } => {
                state.phase = Phase::Error(error);
            }
            ListIntent::ToggleActiveOnly => {
                state.active_only = !state.active_only;
            }
            ListIntent::ToggleSelected { id } => {
                state.store.toggle_selected(&id);
            }
            ListIntent::ToggleRow { index } => {
                state.store.toggle_visible(state.active_only, index);
            }
            ListIntent::DismissError => {
                state.phase = state.phase.dismissed();
            }
        }
        state
    }
}
