//! Transport-agnostic fetch failure taxonomy.
//!
//! The HTTP client maps responses into these variants; the detail view and
//! the feed loader decide messages and retry affordances from them.

/// Why a fetch for a look or product failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The identifier was rejected as malformed (HTTP 400).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The resource does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network failure, timeout, server error or an unreadable body.
    #[error("Transient fetch error: {0}")]
    Transient(String),
}

impl FetchError {
    /// Only transient failures are worth offering a retry for.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transient_is_retryable() {
        assert!(FetchError::Transient("timeout".into()).is_retryable());
        assert!(!FetchError::NotFound("gone".into()).is_retryable());
        assert!(!FetchError::Validation("bad id".into()).is_retryable());
    }
}
