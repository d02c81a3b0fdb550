use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("inference request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("inference endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("inference response parsing failed: {0}")]
    ResponseParse(#[from] serde_json::Error),

    #[error("No response from custom model API")]
    EmptyReply,
}
