use relay_core::models::reply::InferenceReply;
use relay_core::models::request::OutboundPayload;
use reqwest::Url;
use tracing::debug;

use crate::error::InferenceError;

/// Client for the inference endpoint.
///
/// Holds a connection pool and the endpoint URL; cheap to clone and shared
/// across invocations.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl InferenceClient {
    /// Build a client with the HTTP library's default settings (no
    /// explicit timeout).
    pub fn new(endpoint: Url) -> Result<Self, InferenceError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(InferenceError::Client)?;
        Ok(Self { http, endpoint })
    }

    /// POST the payload and return the assistant's reply text.
    ///
    /// A single attempt; non-2xx statuses, non-JSON bodies and replies
    /// without a `response`/`answer` field are all errors.
    pub async fn infer(&self, payload: &OutboundPayload<'_>) -> Result<String, InferenceError> {
        debug!(
            endpoint = %self.endpoint,
            history_len = payload.conversation_history.len(),
            "calling inference endpoint"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(InferenceError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status { status, body });
        }

        let bytes = response.bytes().await.map_err(InferenceError::Request)?;
        let reply: InferenceReply = serde_json::from_slice(&bytes)?;

        let (text, source) = reply.into_text().ok_or(InferenceError::EmptyReply)?;
        debug!(source = source.as_str(), "inference reply received");

        Ok(text)
    }
}
