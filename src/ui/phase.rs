//! Loading phase shared by every screen.

use crate::api::ApiError;
use crate::model::DraftError;

/// What went wrong, as far as the render layer cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request could not complete or timed out.
    Transport,
    /// Server answered with a non-success status.
    Server,
    /// Server answered successfully with an unusable body.
    Format,
    /// The requested record does not exist.
    NotFound,
    /// A required field was missing or an id was unusable; no request was sent.
    Validation,
}

/// A dismissible error shown on a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ViewError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<&ApiError> for ViewError {
    fn from(err: &ApiError) -> Self {
        let kind = match err {
            ApiError::Transport { .. }
            | ApiError::Timeout { .. }
            | ApiError::InvalidBaseUrl { .. }
            | ApiError::Client(_) => ErrorKind::Transport,
            ApiError::Server { .. } => ErrorKind::Server,
            ApiError::Format { .. } => ErrorKind::Format,
            ApiError::NotFound { .. } => ErrorKind::NotFound,
            ApiError::InvalidId { .. } => ErrorKind::Validation,
        };
        Self::new(kind, err.to_string())
    }
}

impl From<DraftError> for ViewError {
    fn from(err: DraftError) -> Self {
        Self::new(ErrorKind::Validation, err.to_string())
    }
}

/// `Idle → Loading → Ready | Error`, and back to `Loading` on each user action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(ViewError),
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    pub fn error(&self) -> Option<&ViewError> {
        match self {
            Phase::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Dismissing an error returns to `Ready`; other phases are unchanged.
    pub fn dismissed(self) -> Self {
        match self {
            Phase::Error(_) => Phase::Ready,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Operation;
    use crate::model::StudentId;

    #[test]
    fn api_errors_map_to_kinds() {
        let server = ApiError::Server {
            operation: Operation::Delete,
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(ViewError::from(&server), ViewError::new(ErrorKind::Server, "boom"));

        let missing = ApiError::NotFound {
            id: StudentId::from("4"),
        };
        assert_eq!(ViewError::from(&missing).kind, ErrorKind::NotFound);

        let format = ApiError::Format {
            operation: Operation::List,
        };
        assert_eq!(
            ViewError::from(&format),
            ViewError::new(ErrorKind::Format, "invalid data format received")
        );
    }

    #[test]
    fn dismiss_only_clears_errors() {
        let failed = Phase::Error(ViewError::new(ErrorKind::Server, "x"));
        assert_eq!(failed.dismissed(), Phase::Ready);
        assert_eq!(Phase::Loading.dismissed(), Phase::Loading);
        assert_eq!(Phase::Idle.dismissed(), Phase::Idle);
    }
}
