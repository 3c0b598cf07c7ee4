//! Transport adapter for the remote student collection.
//!
//! [`StudentApi`] is the seam controllers and the app are written against;
//! [`HttpStudentApi`] is the reqwest implementation. Response shapes are
//! normalized in [`envelope`] before anything leaves this module.

use std::future::Future;

mod client;
pub mod envelope;
mod error;
mod request;

pub use client::{HttpStudentApi, REQUEST_ID_HEADER};
pub use error::{ApiError, Operation, INVALID_FORMAT_MESSAGE};
pub use request::{execute, Request, Response};

use crate::model::{Student, StudentDraft, StudentId};

/// The five operations of the collection resource.
///
/// Implementations hold no state between calls.
pub trait StudentApi: Send + Sync {
    /// `GET /students`
    fn list(&self) -> impl Future<Output = Result<Vec<Student>, ApiError>> + Send;

    /// `GET /students/{id}`
    fn get(&self, id: &StudentId) -> impl Future<Output = Result<Student, ApiError>> + Send;

    /// `POST /students`
    fn create(
        &self,
        draft: &StudentDraft,
    ) -> impl Future<Output = Result<Student, ApiError>> + Send;

    /// `PUT /students/{id}` with full-record replace semantics.
    fn update(
        &self,
        id: &StudentId,
        draft: &StudentDraft,
    ) -> impl Future<Output = Result<Student, ApiError>> + Send;

    /// `DELETE /students/{id}`
    fn delete(&self, id: &StudentId) -> impl Future<Output = Result<(), ApiError>> + Send;
}
