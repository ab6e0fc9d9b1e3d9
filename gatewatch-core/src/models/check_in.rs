//! Check-in and refresh outcomes.

use serde::{Deserialize, Serialize};

use super::account::AccountInfo;
use super::api_key::ApiKeyRecord;

/// Result of a daily check-in attempt. Ephemeral, not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInOutcome {
    /// Whether the site accepted the check-in.
    pub succeeded: bool,
    /// Message from the site (reward text, "already checked in", or an
    /// error description when the request itself failed).
    pub message: String,
}

impl CheckInOutcome {
    /// Creates a failed outcome carrying the given reason.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
        }
    }
}

/// Joined result of a site refresh: account info plus the key listing.
///
/// The two halves are independent; either can be missing/empty while the
/// other is populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSnapshot {
    /// Account info, absent when that query failed.
    pub account: Option<AccountInfo>,
    /// First page of API keys, empty when that query failed.
    pub api_keys: Vec<ApiKeyRecord>,
}
