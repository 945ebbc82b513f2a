//! Error types for paramcache.
//!
//! One error enum for every crate in the workspace, built with `thiserror`.
//! Remote failures keep the code and message the store sent back so callers
//! can decide whether to retry.

use thiserror::Error;

/// Result type alias using `ParamCacheError`.
pub type Result<T> = std::result::Result<T, ParamCacheError>;

/// Main error type for all paramcache operations.
#[derive(Debug, Error)]
pub enum ParamCacheError {
    // ═══════════════════════════════════════════════════════════════════════════
    // REMOTE STORE ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The remote store has no parameter with this name.
    #[error("ParameterNotFound: parameter '{0}' does not exist")]
    ParameterNotFound(String),

    /// The remote store rejected the request.
    #[error("{code}: {message} (HTTP {status})")]
    Remote {
        /// Error code, e.g. `AccessDeniedException`
        code: String,
        /// Human-readable message from the store
        message: String,
        /// HTTP status of the response
        status: u16,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // NETWORK ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION & CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Input validation failed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ParamCacheError {
    /// Returns true if the remote store reported the parameter as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ParamCacheError::ParameterNotFound(_))
    }

    /// Returns true if this error is recoverable (a retry may succeed).
    pub fn is_recoverable(&self) -> bool {
        match self {
            ParamCacheError::Http(_) => true,
            ParamCacheError::Remote { code, status, .. } => {
                *status >= 500
                    || code == "ThrottlingException"
                    || code == "InternalServerError"
            }
            _ => false,
        }
    }

    /// Returns the remote error code, if the store sent one.
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            ParamCacheError::ParameterNotFound(_) => Some(crate::PARAMETER_NOT_FOUND_CODE),
            ParamCacheError::Remote { code, .. } => Some(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_carries_code() {
        let err = ParamCacheError::ParameterNotFound("paramcache_does_not_exist".into());
        let text = err.to_string();
        assert!(text.contains("ParameterNotFound"));
        assert!(text.contains("paramcache_does_not_exist"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_classification() {
        assert!(ParamCacheError::Http("reset".into()).is_recoverable());
        assert!(ParamCacheError::Remote {
            code: "ThrottlingException".into(),
            message: "Rate exceeded".into(),
            status: 400,
        }
        .is_recoverable());
        assert!(!ParamCacheError::Remote {
            code: "AccessDeniedException".into(),
            message: "no".into(),
            status: 400,
        }
        .is_recoverable());
        assert!(!ParamCacheError::ParameterNotFound("x".into()).is_recoverable());
        assert!(!ParamCacheError::Validation("empty".into()).is_not_found());
    }

    #[test]
    fn test_remote_code() {
        let err = ParamCacheError::Remote {
            code: "AccessDeniedException".into(),
            message: "denied".into(),
            status: 400,
        };
        assert_eq!(err.remote_code(), Some("AccessDeniedException"));
        assert_eq!(
            ParamCacheError::ParameterNotFound("x".into()).remote_code(),
            Some("ParameterNotFound")
        );
        assert_eq!(ParamCacheError::Config("x".into()).remote_code(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_result: std::result::Result<serde_json::Value, _> = serde_json::from_str("invalid");
        let result: Result<serde_json::Value> = json_result.map_err(ParamCacheError::from);
        assert!(matches!(result, Err(ParamCacheError::Json(_))));
    }
}
