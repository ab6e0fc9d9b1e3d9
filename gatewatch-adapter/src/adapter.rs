//! The site adapter orchestrator.
//!
//! [`SiteAdapter`] composes request building, the HTTP transport, and
//! response normalization behind the [`SiteApi`] trait. It holds no state
//! beyond the shared `reqwest::Client`, so concurrent calls with different
//! credentials are safe by construction.

use std::time::Duration;

use async_trait::async_trait;
use gatewatch_core::{
    AccountInfo, ApiKeyRecord, CheckInOutcome, SiteApi, SiteCredential, SiteSnapshot,
};
use tracing::{debug, info, instrument, warn};

use crate::error::AdapterError;
use crate::normalize::{self, KeyListOutcome, ListShape};
use crate::request::{self, Operation};

/// Default request timeout in seconds, used by [`SiteAdapter::default`].
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Site Adapter
// ============================================================================

/// Stateless adapter speaking to all supported gateway forks.
///
/// Every remote interaction is treated as unreliable: transport faults,
/// non-2xx statuses, undecodable bodies, and `success: false` payloads all
/// degrade to the operation's empty/negative result. The adapter never
/// retries; that is the caller's decision.
#[derive(Debug, Clone)]
pub struct SiteAdapter {
    http: reqwest::Client,
}

impl SiteAdapter {
    /// Creates an adapter whose requests are bounded by `timeout`.
    ///
    /// The timeout is the only configuration the adapter owns; it exists so
    /// one unresponsive site cannot stall a dashboard-wide fan-out.
    pub fn new(timeout: Duration) -> Result<Self, AdapterError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gatewatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http })
    }

    /// Creates an adapter over a caller-configured client.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Sends one request and returns the body of a 2xx response.
    async fn execute(
        &self,
        credential: &SiteCredential,
        operation: Operation,
    ) -> Result<String, AdapterError> {
        let url = request::build_url(credential, operation);
        let headers = request::build_headers(credential)?;

        debug!(
            site = %credential.base_url,
            operation = operation.name(),
            kind = %credential.kind,
            "Sending request"
        );

        let builder = match operation {
            Operation::CheckIn => self.http.post(&url),
            Operation::AccountInfo | Operation::KeyList => self.http.get(&url),
        };

        let response = builder.headers(headers).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(
                site = %credential.base_url,
                operation = operation.name(),
                status = %status,
                "Remote answered outside 2xx"
            );
            return Err(AdapterError::Status(status));
        }

        Ok(response.text().await?)
    }

    /// Fallible account-info fetch, kept internal so the public surface
    /// stays degraded-value-only.
    async fn account_info(
        &self,
        credential: &SiteCredential,
    ) -> Result<AccountInfo, AdapterError> {
        let body = self.execute(credential, Operation::AccountInfo).await?;
        Ok(normalize::parse_account_info(&body)?)
    }

    /// Fallible key-list fetch; the parse itself never fails.
    async fn key_list(
        &self,
        credential: &SiteCredential,
    ) -> Result<KeyListOutcome, AdapterError> {
        let body = self.execute(credential, Operation::KeyList).await?;
        Ok(normalize::parse_api_key_list(&body))
    }
}

impl Default for SiteAdapter {
    /// Creates an adapter with the default 30 second timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created, which indicates a
    /// broken TLS configuration on the host.
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS)).unwrap_or_else(|e| {
            panic!("Failed to create default HTTP client: {e}")
        })
    }
}

// ============================================================================
// SiteApi Implementation
// ============================================================================

#[async_trait]
impl SiteApi for SiteAdapter {
    #[instrument(skip(self, credential), fields(site = %credential.base_url))]
    async fn validate(&self, credential: &SiteCredential) -> bool {
        let body = match self.execute(credential, Operation::AccountInfo).await {
            Ok(body) => body,
            Err(e) => {
                warn!(site = %credential.base_url, error = %e, "Validation request failed");
                return false;
            }
        };

        match normalize::parse_success_flag(&body) {
            Ok(success) => {
                if success {
                    info!(site = %credential.base_url, "Credential validated");
                } else {
                    warn!(site = %credential.base_url, "Site rejected the credential");
                }
                success
            }
            Err(e) => {
                warn!(site = %credential.base_url, error = %e, "Undecodable validation response");
                false
            }
        }
    }

    #[instrument(skip(self, credential), fields(site = %credential.base_url))]
    async fn fetch_account_info(&self, credential: &SiteCredential) -> Option<AccountInfo> {
        match self.account_info(credential).await {
            Ok(info) => {
                debug!(
                    site = %credential.base_url,
                    username = %info.username,
                    quota_used = info.quota_used,
                    "Fetched account info"
                );
                Some(info)
            }
            Err(e) => {
                warn!(site = %credential.base_url, error = %e, "Account info query failed");
                None
            }
        }
    }

    #[instrument(skip(self, credential), fields(site = %credential.base_url))]
    async fn list_api_keys(&self, credential: &SiteCredential) -> Vec<ApiKeyRecord> {
        match self.key_list(credential).await {
            Ok(outcome) => {
                if outcome.shape == ListShape::Unmatched {
                    warn!(
                        site = %credential.base_url,
                        "Key listing had no recognized shape, treating as empty"
                    );
                } else {
                    debug!(
                        site = %credential.base_url,
                        count = outcome.records.len(),
                        shape = ?outcome.shape,
                        "Fetched key listing"
                    );
                }
                outcome.into_records()
            }
            Err(e) => {
                warn!(site = %credential.base_url, error = %e, "Key listing query failed");
                Vec::new()
            }
        }
    }

    #[instrument(skip(self, credential), fields(site = %credential.base_url))]
    async fn check_in(&self, credential: &SiteCredential) -> CheckInOutcome {
        match self.execute(credential, Operation::CheckIn).await {
            Ok(body) => {
                let outcome = normalize::parse_check_in(&body);
                if outcome.succeeded {
                    info!(site = %credential.base_url, message = %outcome.message, "Check-in succeeded");
                } else {
                    warn!(site = %credential.base_url, message = %outcome.message, "Check-in refused");
                }
                outcome
            }
            Err(e) => {
                warn!(site = %credential.base_url, error = %e, "Check-in request failed");
                let message = match e {
                    AdapterError::Status(status) => format!("check-in request failed: {status}"),
                    other => other.to_string(),
                };
                CheckInOutcome::failure(message)
            }
        }
    }

    #[instrument(skip(self, credential), fields(site = %credential.base_url))]
    async fn refresh(&self, credential: &SiteCredential) -> SiteSnapshot {
        // Independent queries; one failing half never disturbs the other.
        let (account, api_keys) = tokio::join!(
            self.fetch_account_info(credential),
            self.list_api_keys(credential)
        );

        SiteSnapshot { account, api_keys }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gatewatch_core::SiteKind;

    fn unroutable_credential() -> SiteCredential {
        // Port 9 is the discard service; nothing listens there in test
        // environments, so connect fails fast.
        SiteCredential::new("http://127.0.0.1:9", "tok", 7, SiteKind::NewApi)
    }

    #[test]
    fn test_adapter_creation() {
        let adapter = SiteAdapter::new(Duration::from_secs(5));
        assert!(adapter.is_ok());
    }

    #[tokio::test]
    async fn test_validate_is_false_on_connection_error() {
        let adapter = SiteAdapter::new(Duration::from_secs(2)).unwrap();
        assert!(!adapter.validate(&unroutable_credential()).await);
    }

    #[tokio::test]
    async fn test_check_in_reports_transport_error_text() {
        let adapter = SiteAdapter::new(Duration::from_secs(2)).unwrap();
        let outcome = adapter.check_in(&unroutable_credential()).await;
        assert!(!outcome.succeeded);
        assert!(!outcome.message.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_degrades_to_empty_snapshot() {
        let adapter = SiteAdapter::new(Duration::from_secs(2)).unwrap();
        let snapshot = adapter.refresh(&unroutable_credential()).await;
        assert!(snapshot.account.is_none());
        assert!(snapshot.api_keys.is_empty());
    }
}
