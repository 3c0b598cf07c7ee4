//! Client for a remote student collection: a transport adapter, an
//! in-memory record store, and per-screen controllers.

pub mod api;
pub mod args;
pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod ui;
