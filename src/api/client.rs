//! reqwest-backed implementation of [`StudentApi`].

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::timeout;
use uuid::Uuid;

use crate::api::envelope;
use crate::api::error::{ApiError, Operation};
use crate::api::StudentApi;
use crate::config::ApiConfig;
use crate::model::{Student, StudentDraft, StudentId};

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Stateless HTTP adapter for the student collection resource.
#[derive(Debug, Clone)]
pub struct HttpStudentApi {
    client: Client,
    collection: Url,
    request_timeout: Duration,
}

impl HttpStudentApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let collection = collection_url(&config.base_url, &config.collection_path)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            collection,
            request_timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    /// URL of the collection, e.g. `https://host/students`.
    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    /// URL of a single record. The identifier is percent-encoded as one segment.
    ///
    /// Empty, `.` and `..` identifiers are rejected: the URL parser would fold
    /// them into the collection path itself.
    pub fn record_url(&self, operation: Operation, id: &StudentId) -> Result<Url, ApiError> {
        let invalid = || ApiError::InvalidId {
            operation,
            id: id.clone(),
        };
        if matches!(id.as_str().trim(), "" | "." | "..") {
            tracing::warn!(operation = operation.name(), id = %id, "Refusing unusable record id");
            return Err(invalid());
        }

        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(ACCEPT, "application/json")
    }

    /// Send a request and classify the status. Non-success statuses become
    /// [`ApiError::Server`] carrying the body's message or the generic one.
    async fn send(
        &self,
        operation: Operation,
        builder: RequestBuilder,
    ) -> Result<Vec<u8>, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        let request = builder
            .header(REQUEST_ID_HEADER, &request_id)
            .build()
            .map_err(|source| ApiError::Transport { operation, source })?;

        tracing::debug!(
            operation = operation.name(),
            method = %request.method(),
            url = %request.url(),
            request_id = %request_id,
            "Sending request"
        );

        let exchange = async {
            let response = self.client.execute(request).await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<(StatusCode, Vec<u8>), reqwest::Error>((status, body.to_vec()))
        };

        let (status, body) = match timeout(self.request_timeout, exchange).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(source)) => {
                tracing::warn!(
                    operation = operation.name(),
                    request_id = %request_id,
                    error = %source,
                    "Request could not be completed"
                );
                return Err(ApiError::Transport { operation, source });
            }
            Err(_) => {
                tracing::warn!(
                    operation = operation.name(),
                    request_id = %request_id,
                    "Request timed out"
                );
                return Err(ApiError::Timeout {
                    operation,
                    seconds: self.request_timeout.as_secs(),
                });
            }
        };

        if !status.is_success() {
            let message = envelope::error_message(&body)
                .unwrap_or_else(|| operation.failure_message().to_string());
            tracing::warn!(
                operation = operation.name(),
                request_id = %request_id,
                status = status.as_u16(),
                message = %message,
                "Server rejected request"
            );
            return Err(ApiError::Server {
                operation,
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(
            operation = operation.name(),
            request_id = %request_id,
            status = status.as_u16(),
            bytes = body.len(),
            "Request succeeded"
        );
        Ok(body)
    }
}

impl StudentApi for HttpStudentApi {
    async fn list(&self) -> Result<Vec<Student>, ApiError> {
        let operation = Operation::List;
        let body = self
            .send(operation, self.request(Method::GET, self.collection.clone()))
            .await?;
        decode(operation, parse_body(operation, &body)?)
    }

    async fn get(&self, id: &StudentId) -> Result<Student, ApiError> {
        let operation = Operation::Get;
        let url = self.record_url(operation, id)?;
        let body = match self.send(operation, self.request(Method::GET, url)).await {
            Ok(body) => body,
            Err(ApiError::Server { status: 404, .. }) => {
                return Err(ApiError::NotFound { id: id.clone() });
            }
            Err(err) => return Err(err),
        };

        let value = parse_body(operation, &body)?;
        if value.is_null() {
            return Err(ApiError::NotFound { id: id.clone() });
        }
        decode(operation, value)
    }

    async fn create(&self, draft: &StudentDraft) -> Result<Student, ApiError> {
        let operation = Operation::Create;
        let builder = self
            .request(Method::POST, self.collection.clone())
            .json(draft);
        let body = self.send(operation, builder).await?;
        decode(operation, parse_body(operation, &body)?)
    }

    async fn update(&self, id: &StudentId, draft: &StudentDraft) -> Result<Student, ApiError> {
        let operation = Operation::Update;
        let url = self.record_url(operation, id)?;
        let builder = self.request(Method::PUT, url).json(draft);
        let body = self.send(operation, builder).await?;
        decode(operation, parse_body(operation, &body)?)
    }

    async fn delete(&self, id: &StudentId) -> Result<(), ApiError> {
        let operation = Operation::Delete;
        let url = self.record_url(operation, id)?;
        self.send(operation, self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}

/// Build the collection URL from a base URL and a path such as `/students`.
fn collection_url(base_url: &str, collection_path: &str) -> Result<Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    url.path_segments_mut()
        .map_err(|_| invalid("URL cannot be a base".to_string()))?
        .pop_if_empty()
        .extend(collection_path.split('/').filter(|segment| !segment.is_empty()));
    Ok(url)
}

/// An empty success body reads as JSON `null`.
fn parse_body(operation: Operation, body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|_| ApiError::Format { operation })
}

fn decode<T: DeserializeOwned>(operation: Operation, value: Value) -> Result<T, ApiError> {
    envelope::normalize(value).ok_or(ApiError::Format { operation })
}
