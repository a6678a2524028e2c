//! Core error types for SemNet
//!
//! All errors are explicit - no silent failures allowed. Conditions that are
//! part of normal control flow (a relation that is not attached, an element
//! that is not a set member) are reported through `Option`/`bool` returns and
//! never appear here.

use crate::types::addr::ElementAddr;
use thiserror::Error;

/// Top-level error type for SemNet operations
#[derive(Debug, Error)]
pub enum SemNetError {
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The element a diagnostic was requested for does not exist
    #[error("Element not found: {addr}")]
    ElementNotFound { addr: ElementAddr },

    /// A well-known element is missing from the store
    #[error("Keynode not found: {identifier}")]
    KeynodeNotFound { identifier: String },

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("Missing required parameter: {name}")]
    MissingParameter { name: &'static str },
}

/// Convenience type alias for SemNet results
pub type SemNetResult<T> = Result<T, SemNetError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_error_display() {
        let err = SemNetError::ElementNotFound {
            addr: ElementAddr::new(1, 2),
        };
        assert_eq!(err.to_string(), "Element not found: 1|2");

        let err = SemNetError::KeynodeNotFound {
            identifier: "rrel_3".into(),
        };
        assert_eq!(err.to_string(), "Keynode not found: rrel_3");
    }

    #[test]
    fn test_store_error_converts() {
        let err: SemNetError = StoreError::CapacityExceeded.into();
        assert!(matches!(err, SemNetError::Store(StoreError::CapacityExceeded)));
        assert_eq!(err.to_string(), "Store error: Store capacity exceeded");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidParameter {
            name: "segment_size",
            message: "must be >= 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'segment_size': must be >= 1"
        );
    }
}
