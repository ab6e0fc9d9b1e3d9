//! Canonical API key records.

use serde::{Deserialize, Serialize};

/// One API key as reported by a site's token listing.
///
/// A listing is a snapshot of the first page in server order; records carry
/// no local identity across queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    /// Key id on the remote site.
    pub id: i64,
    /// Remote user id owning the key.
    pub owner_remote_id: i64,
    /// The key secret itself.
    pub secret_value: String,
    /// Human-readable key name.
    pub label: String,
    /// Whether the key is currently enabled.
    pub enabled: bool,
    /// Creation time, unix seconds.
    pub created_at: i64,
    /// Last access time, unix seconds.
    pub accessed_at: i64,
    /// Expiry time, unix seconds. The forks use -1 for "never".
    pub expires_at: i64,
    /// Quota still available to this key.
    pub quota_remaining: i64,
    /// Quota consumed by this key.
    pub quota_used: i64,
    /// Whether the key is exempt from quota accounting.
    pub unlimited_quota: bool,
}
