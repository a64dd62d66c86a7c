//! Client Errors

use thiserror::Error;

/// Common result type for items API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Everything that can go wrong talking to the items resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response (DNS, CORS, connection refused, ...)
    #[error("network error: {0}")]
    Network(String),
    /// Response arrived with a non-2xx status
    #[error("server responded with status {0}")]
    Status(u16),
    /// Body was not the JSON we expected
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Status(503).to_string(), "server responded with status 503");
        assert_eq!(ApiError::Network("refused".into()).to_string(), "network error: refused");
    }
}
