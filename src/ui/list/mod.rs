//! Student list screen: the full collection, an active-only filter,
//! per-row selection and delete.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::ListController;
pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::ListState;
