//! Single-record screen.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::DetailController;
pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::DetailState;
