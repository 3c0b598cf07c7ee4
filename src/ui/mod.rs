//! View layer: one controller per screen plus the app that hosts them.

pub mod app;
pub mod confirm;
pub mod detail;
pub mod form;
pub mod list;
pub mod mvi;
pub mod phase;
pub mod render;
pub mod route;
pub mod ticket;
