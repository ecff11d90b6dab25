use lookbook_core::fetch::FetchError;

/// Errors from the Lookbook API client, classified by what the caller can do
/// about them.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server rejected an identifier as malformed (HTTP 400).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network failure, timeout, 5xx, or a body that could not be decoded.
    #[error("Transient error: {0}")]
    Transient(String),
}

impl ClientError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transient(err.to_string())
    }
}

impl From<ClientError> for FetchError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Validation(msg) => FetchError::Validation(msg),
            ClientError::NotFound(msg) => FetchError::NotFound(msg),
            ClientError::Transient(msg) => FetchError::Transient(msg),
        }
    }
}
