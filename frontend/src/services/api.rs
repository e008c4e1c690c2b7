use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{ApiErrorBody, Expense, ExpensePayload, Summary};
use thiserror::Error;

/// Failure of a single round trip to the expense backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("server error {status}")]
    Status { status: u16, message: Option<String> },
}

impl RequestError {
    /// The backend's `message` field, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RequestError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Server message when present, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// The sole gateway to persisted expenses. One call is one HTTP round trip;
/// nothing is retried or cached.
#[async_trait(?Send)]
pub trait ExpenseApi {
    async fn list(&self) -> Result<Vec<Expense>, RequestError>;
    async fn create(&self, payload: &ExpensePayload) -> Result<Expense, RequestError>;
    async fn update(&self, id: &str, payload: &ExpensePayload) -> Result<Expense, RequestError>;
    async fn delete(&self, id: &str) -> Result<(), RequestError>;
    async fn fetch_summary(&self) -> Result<Summary, RequestError>;
}

/// API client for the expenses resource.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn summary_url(&self) -> String {
        format!("{}/summary", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

async fn send(request: Result<Request, gloo::net::Error>) -> Result<Response, RequestError> {
    let request = request.map_err(|e| RequestError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(RequestError::Status {
            status,
            message: ApiErrorBody::message_from(&body),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    response
        .json::<T>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ExpenseApi for ApiClient {
    async fn list(&self) -> Result<Vec<Expense>, RequestError> {
        let response = send(Request::get(&self.collection_url()).build()).await?;
        decode(response).await
    }

    async fn create(&self, payload: &ExpensePayload) -> Result<Expense, RequestError> {
        let response = send(Request::post(&self.collection_url()).json(payload)).await?;
        decode(response).await
    }

    async fn update(&self, id: &str, payload: &ExpensePayload) -> Result<Expense, RequestError> {
        let response = send(Request::put(&self.item_url(id)).json(payload)).await?;
        decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), RequestError> {
        send(Request::delete(&self.item_url(id)).build()).await?;
        Ok(())
    }

    async fn fetch_summary(&self) -> Result<Summary, RequestError> {
        let response = send(Request::get(&self.summary_url()).build()).await?;
        decode(response).await
    }
}
