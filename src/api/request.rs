use crate::api::error::{ApiError, Operation};
use crate::api::StudentApi;
use crate::model::{Student, StudentDraft, StudentId};

/// A call a controller wants made, detached from whoever performs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Get { id: StudentId },
    Create { draft: StudentDraft },
    Update { id: StudentId, draft: StudentDraft },
    Delete { id: StudentId },
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::List => Operation::List,
            Request::Get { .. } => Operation::Get,
            Request::Create { .. } => Operation::Create,
            Request::Update { .. } => Operation::Update,
            Request::Delete { .. } => Operation::Delete,
        }
    }
}

/// Successful outcome of a [`Request`], already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Listed(Vec<Student>),
    Fetched(Student),
    Created(Student),
    Updated(Student),
    Deleted(StudentId),
}

/// Perform `request` against `api`.
pub async fn execute<A: StudentApi>(api: &A, request: Request) -> Result<Response, ApiError> {
    match request {
        Request::List => api.list().await.map(Response::Listed),
        Request::Get { id } => api.get(&id).await.map(Response::Fetched),
        Request::Create { draft } => api.create(&draft).await.map(Response::Created),
        Request::Update { id, draft } => api.update(&id, &draft).await.map(Response::Updated),
        Request::Delete { id } => {
            api.delete(&id).await?;
            Ok(Response::Deleted(id))
        }
    }
}
