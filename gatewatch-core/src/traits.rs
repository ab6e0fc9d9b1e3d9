//! Trait definitions for gatewatch.
//!
//! This module defines the contract the site adapter exposes to the rest of
//! the application (the CRUD/web layer holds it as `Arc<dyn SiteApi>`).

use async_trait::async_trait;

use crate::models::{AccountInfo, ApiKeyRecord, CheckInOutcome, SiteCredential, SiteSnapshot};

/// The four remote operations against a gateway site, plus the joined
/// refresh.
///
/// Every method converts remote failure into its designated "no result"
/// value instead of returning an error: transport faults, non-2xx statuses,
/// malformed JSON, and well-formed `success: false` payloads are all
/// equivalent from the caller's point of view. One misbehaving site must
/// never abort a dashboard-wide fan-out.
///
/// Implementations must be stateless between calls so concurrent invocation
/// with different credentials is safe.
#[async_trait]
pub trait SiteApi: Send + Sync {
    /// Checks whether a (possibly not-yet-persisted) credential can reach
    /// its site.
    ///
    /// Returns `true` only when the account-info request answers 2xx with
    /// `success: true`. Used as a pre-registration gate, so it fails closed.
    async fn validate(&self, credential: &SiteCredential) -> bool;

    /// Fetches the caller's account info, or `None` on any failure.
    async fn fetch_account_info(&self, credential: &SiteCredential) -> Option<AccountInfo>;

    /// Lists the first page of the caller's API keys (server order, at most
    /// ten), or an empty list on any failure.
    async fn list_api_keys(&self, credential: &SiteCredential) -> Vec<ApiKeyRecord>;

    /// Performs the daily check-in.
    async fn check_in(&self, credential: &SiteCredential) -> CheckInOutcome;

    /// Fetches account info and the key listing concurrently and joins the
    /// results. A failure in one half never cancels the other.
    async fn refresh(&self, credential: &SiteCredential) -> SiteSnapshot;
}
