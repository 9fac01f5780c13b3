//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Cluster unreachable, TLS failure, kubeconfig problems
    #[error("Connection error: {0}")]
    Connection(String),

    /// Rejected by the API server (401 / 403)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource already exists
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Any other API server status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// metrics.k8s.io unavailable or malformed
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Local file system error (graph output)
    #[error("IO error: {0}")]
    Io(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Background work died without producing a result
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::AlreadyExists(_) | Self::Validation(_) | Self::Unauthorized(_)
        )
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(feature = "kube-client")]
impl From<kube::Error> for CoreError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(response) => match response.code {
                404 => Self::NotFound(response.message),
                409 => Self::AlreadyExists(response.message),
                401 | 403 => Self::Unauthorized(response.message),
                code => Self::Api {
                    code,
                    message: response.message,
                },
            },
            other => Self::Connection(other.to_string()),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
