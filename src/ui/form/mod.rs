//! Add/edit form screen.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::FormController;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormMode, FormState};
