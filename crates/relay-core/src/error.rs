use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("missing required field: message")]
    MissingMessage,
}
