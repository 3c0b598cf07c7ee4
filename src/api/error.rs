//! Error types for the transport adapter.
//!
//! Every failure carries the operation it came from so that callers can
//! render a message naming what was attempted.

use std::fmt;

use thiserror::Error;

use crate::model::StudentId;

/// Message used when a success response does not have the expected shape.
pub const INVALID_FORMAT_MESSAGE: &str = "invalid data format received";

/// The five calls the adapter can make against the collection resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Short name used in log fields.
    pub fn name(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Generic failure message naming the attempted operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch students",
            Operation::Get => "Failed to fetch student",
            Operation::Create => "Failed to add student",
            Operation::Update => "Failed to update student",
            Operation::Delete => "Failed to delete student",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Errors that can occur while talking to the collection resource.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be completed (connection refused, reset, ...).
    #[error("{operation}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// The request did not finish within the configured total timeout.
    #[error("{operation}: request timed out after {seconds}s")]
    Timeout { operation: Operation, seconds: u64 },

    /// Non-success status. `message` is the server's own text when it sent one.
    #[error("{message}")]
    Server {
        operation: Operation,
        status: u16,
        message: String,
    },

    /// Success status, but the body was not an accepted shape.
    #[error("invalid data format received")]
    Format { operation: Operation },

    /// The requested record does not exist.
    #[error("Student '{id}' not found")]
    NotFound { id: StudentId },

    /// The identifier cannot name a single record (empty, `.` or `..`).
    #[error("Invalid student id '{id}'")]
    InvalidId { operation: Operation, id: StudentId },

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// The operation this error belongs to, if it came from a call.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ApiError::Transport { operation, .. }
            | ApiError::Timeout { operation, .. }
            | ApiError::Server { operation, .. }
            | ApiError::Format { operation }
            | ApiError::InvalidId { operation, .. } => Some(*operation),
            ApiError::NotFound { .. } => Some(Operation::Get),
            ApiError::InvalidBaseUrl { .. } | ApiError::Client(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}
