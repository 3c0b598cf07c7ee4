//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! A screen is a state value, a set of intents and a pure reducer. Its
//! controller owns the state and is the only code that dispatches.

/// Snapshot of one screen: everything the render layer needs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action (toggle a filter, edit a field) or a network result
/// (a list arrived, a delete was confirmed).
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State` transition. No I/O happens here.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Replace `$self.$field` with the reducer's output for `$intent`.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub(crate) use dispatch_mvi;
