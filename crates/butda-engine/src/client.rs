//! Research service client.
//!
//! The controller talks to the service through the [`ResearchClient`] trait;
//! [`HttpResearchClient`] is the reqwest implementation. Responses are kept
//! close to the wire ([`ResearchResponse`]: status code plus the parsed
//! payload, if any) and turned into an answer or a failure message by
//! [`ResearchResponse::outcome`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Path of the research endpoint, relative to the API base URL.
pub const RESEARCH_PATH: &str = "api/research";

/// Error body used when the service fails without saying why.
pub const FALLBACK_SERVER_ERROR: &str = "Failed to get a response from the server.";

/// Error body used when a transport failure has no description.
pub const FALLBACK_NETWORK_ERROR: &str = "Network error while contacting the server.";

/// Transport-level failures. The `Display` text is what the user sees.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the connection failed.
    #[error("{0}")]
    Http(reqwest::Error),

    /// The configured request timeout elapsed.
    #[error("The request timed out.")]
    Timeout,

    /// The task running the request died before producing a result.
    #[error("The request failed unexpectedly: {0}")]
    TaskFailed(String),

    /// The request was abandoned on purpose.
    #[error("Request cancelled.")]
    Cancelled,
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

impl ClientError {
    /// The body of the error entry that reports this failure.
    pub fn description(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            FALLBACK_NETWORK_ERROR.to_owned()
        } else {
            text
        }
    }
}

/// Request body sent to the service.
#[derive(Debug, Serialize)]
pub struct ResearchRequest<'a> {
    pub query: &'a str,
}

/// The fields of a response payload the client cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResearchPayload {
    /// Truthiness of the top-level `success` field.
    pub success: bool,
    /// `data.summary`, when it is a string.
    pub summary: Option<String>,
    /// `error.message`, when it is a string.
    pub error_message: Option<String>,
}

impl ResearchPayload {
    /// Extract the known fields from an arbitrary JSON value.
    ///
    /// Fields with unexpected types are treated as absent.
    pub fn from_value(value: &Value) -> Self {
        Self {
            success: value.get("success").is_some_and(is_truthy),
            summary: value
                .pointer("/data/summary")
                .and_then(Value::as_str)
                .map(str::to_owned),
            error_message: value
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }
}

/// JavaScript-style truthiness, which is what the service's clients assume.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// What the service answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed payload; `None` when the body was not JSON.
    pub payload: Option<ResearchPayload>,
}

/// How a response resolves the pending entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResearchOutcome {
    /// Raw summary text, still to be rendered.
    Summary(String),
    /// Plain-text failure message.
    Failed(String),
}

impl ResearchResponse {
    /// Build a response from a status code and raw body bytes.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let payload = serde_json::from_slice::<Value>(body)
            .ok()
            .map(|value| ResearchPayload::from_value(&value));
        if payload.is_none() {
            debug!(status, "response body is not JSON");
        }
        Self { status, payload }
    }

    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Classify the response.
    ///
    /// Only a 2xx response whose payload has a truthy `success` and a
    /// non-empty `data.summary` is an answer; everything else is a failure
    /// carrying the server's `error.message` or the generic fallback.
    pub fn outcome(self) -> ResearchOutcome {
        let success_status = self.is_success_status();
        let payload = self.payload.unwrap_or_default();

        if success_status && payload.success {
            if let Some(summary) = payload.summary.filter(|s| !s.trim().is_empty()) {
                return ResearchOutcome::Summary(summary);
            }
        }

        let message = payload
            .error_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_SERVER_ERROR.to_owned());
        ResearchOutcome::Failed(message)
    }
}

/// Something that can answer a research query.
#[async_trait]
pub trait ResearchClient: Send + Sync {
    /// Send one query and wait for the service's answer.
    ///
    /// `Err` means the exchange itself failed; server-side failures come back
    /// as a `ResearchResponse`.
    async fn research(&self, query: &str) -> Result<ResearchResponse, ClientError>;
}

/// [`ResearchClient`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpResearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpResearchClient {
    /// Create a client that posts to `endpoint`, optionally bounding each
    /// request by `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build().map_err(ClientError::Http)?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ResearchClient for HttpResearchClient {
    async fn research(&self, query: &str) -> Result<ResearchResponse, ClientError> {
        debug!(endpoint = %self.endpoint, "sending research request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&ResearchRequest { query })
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "research request failed");
                ClientError::from(err)
            })?;

        let status = response.status().as_u16();
        // An unreadable body is handled like a non-JSON one.
        let body = match response.bytes().await {
            Ok(body) => body.to_vec(),
            Err(err) => {
                warn!(status, error = %err, "failed to read response body");
                Vec::new()
            }
        };
        debug!(status, bytes = body.len(), "research response received");

        Ok(ResearchResponse::from_body(status, &body))
    }
}
