use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Response contained no text")]
    EmptyResponse,

    #[error("Prompt was blocked: {0}")]
    Blocked(String),

    #[error("Client configuration error: {0}")]
    Config(String),
}
