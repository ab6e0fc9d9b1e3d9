//! Canonical account information.

use serde::{Deserialize, Serialize};

/// Account information for the caller's user on one site.
///
/// Produced fresh from a remote payload on every query; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// User id on the remote site.
    pub remote_id: i64,
    /// Login name.
    pub username: String,
    /// Display name shown in the remote UI.
    pub display_name: String,
    /// Total quota in the smallest currency unit. Negative means unlimited.
    pub quota_total: i64,
    /// Quota consumed so far.
    pub quota_used: i64,
    /// Lifetime request count.
    pub request_count: i64,
    /// Billing group name.
    pub group: String,
}

impl AccountInfo {
    /// Returns true if the account has no quota ceiling.
    pub fn is_unlimited(&self) -> bool {
        self.quota_total < 0
    }

    /// Remaining quota, or `None` for unlimited accounts.
    pub fn quota_remaining(&self) -> Option<i64> {
        if self.is_unlimited() {
            None
        } else {
            Some(self.quota_total - self.quota_used)
        }
    }
}
