//! Adapter error types.
//!
//! These errors never cross the [`SiteApi`](gatewatch_core::SiteApi)
//! boundary: each public operation folds them into its degraded value
//! (`false`, `None`, an empty list, or a failed outcome). They exist so the
//! internal request/normalize layers can report *which* of the three failure
//! classes occurred and the orchestrator can log it.

use thiserror::Error;

// ============================================================================
// Adapter Error
// ============================================================================

/// Failure of one remote operation, by class.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Network-level failure: DNS, TLS, timeout, connection refused.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The site answered, but outside 2xx.
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// Credential contains bytes that cannot be carried in a header.
    #[error("credential not header-encodable: {0}")]
    InvalidHeader(String),

    /// The body decoded, but not into anything usable.
    #[error(transparent)]
    Normalization(#[from] NormalizeError),
}

// ============================================================================
// Normalize Error
// ============================================================================

/// Failure to normalize a remote payload into a canonical model.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Well-formed JSON, but `success` was false or `data` was missing.
    #[error("remote reported unsuccessful result")]
    Unsuccessful,

    /// The body was not valid JSON for the expected envelope.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = AdapterError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_normalize_error_passes_through() {
        let err: AdapterError = NormalizeError::Unsuccessful.into();
        assert_eq!(err.to_string(), "remote reported unsuccessful result");
    }
}
