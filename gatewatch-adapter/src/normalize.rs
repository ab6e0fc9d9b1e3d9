//! Response normalization.
//!
//! The four forks agree on field names but not on envelope structure: the
//! key listing's `data` field may be a bare array or one of three wrapper
//! objects, depending on fork and version. Everything here takes the raw
//! response body and produces canonical `gatewatch-core` types.

use gatewatch_core::{AccountInfo, ApiKeyRecord, CheckInOutcome};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::NormalizeError;

// ============================================================================
// Wire Types
// ============================================================================

/// Envelope of `GET /api/user/self`.
#[derive(Debug, Deserialize)]
struct AccountEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<AccountData>,
}

/// `data` object of the account info response. Remote field names are
/// snake_case across all forks.
#[derive(Debug, Deserialize)]
struct AccountData {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    username: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    quota: i64,
    #[serde(default)]
    used_quota: i64,
    #[serde(default)]
    request_count: i64,
    #[serde(default)]
    group: String,
}

impl AccountData {
    fn into_account_info(self) -> AccountInfo {
        AccountInfo {
            remote_id: self.id,
            username: self.username,
            display_name: self.display_name,
            quota_total: self.quota,
            quota_used: self.used_quota,
            request_count: self.request_count,
            group: self.group,
        }
    }
}

/// One element of the key listing, identical across forks.
#[derive(Debug, Deserialize)]
struct ApiKeyItem {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    user_id: i64,
    #[serde(default)]
    key: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    status: i64,
    #[serde(default)]
    created_time: i64,
    #[serde(default)]
    accessed_time: i64,
    #[serde(default)]
    expired_time: i64,
    #[serde(default)]
    remain_quota: i64,
    #[serde(default)]
    unlimited_quota: bool,
    #[serde(default)]
    used_quota: i64,
}

impl ApiKeyItem {
    fn into_record(self) -> ApiKeyRecord {
        ApiKeyRecord {
            id: self.id,
            owner_remote_id: self.user_id,
            secret_value: self.key,
            label: self.name,
            // status 1 means enabled on every fork
            enabled: self.status == 1,
            created_at: self.created_time,
            accessed_at: self.accessed_time,
            expires_at: self.expired_time,
            quota_remaining: self.remain_quota,
            quota_used: self.used_quota,
            unlimited_quota: self.unlimited_quota,
        }
    }
}

/// Envelope of the key listing. `data` is kept raw because its shape varies.
#[derive(Debug, Deserialize)]
struct KeyListEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Value>,
}

/// Envelope of the check-in response.
#[derive(Debug, Deserialize)]
struct CheckInEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: String,
}

/// Minimal envelope for operations that only care whether the remote said
/// yes.
#[derive(Debug, Deserialize)]
struct SuccessEnvelope {
    #[serde(default)]
    success: bool,
}

// ============================================================================
// Key List Shapes
// ============================================================================

/// Which envelope shape the key listing's `data` field matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// `data` was itself the array.
    BareArray,
    /// `data.items` held the array.
    Items,
    /// `data.records` held the array.
    Records,
    /// `data.data` held the array.
    NestedData,
    /// No recognized shape (also covers undecodable bodies and
    /// `success: false`).
    Unmatched,
}

/// Shape matchers in precedence order; the first one returning an array
/// wins.
type ShapeMatcher = fn(&Value) -> Option<&Vec<Value>>;

const SHAPE_MATCHERS: &[(ListShape, ShapeMatcher)] = &[
    (ListShape::BareArray, |data| data.as_array()),
    (ListShape::Items, |data| data.get("items")?.as_array()),
    (ListShape::Records, |data| data.get("records")?.as_array()),
    (ListShape::NestedData, |data| data.get("data")?.as_array()),
];

/// Result of normalizing a key listing.
///
/// The public operations collapse this to the record list, but the matched
/// shape is kept observable so a caller can tell "no keys" from "shape we
/// do not recognize" if it ever needs to.
#[derive(Debug, Clone)]
pub struct KeyListOutcome {
    /// Canonical records, in server order.
    pub records: Vec<ApiKeyRecord>,
    /// The shape that produced them.
    pub shape: ListShape,
}

impl KeyListOutcome {
    fn unmatched() -> Self {
        Self {
            records: Vec::new(),
            shape: ListShape::Unmatched,
        }
    }

    /// Discards the shape and keeps the records.
    pub fn into_records(self) -> Vec<ApiKeyRecord> {
        self.records
    }
}

// ============================================================================
// Parsers
// ============================================================================

/// Parses an account info response body.
///
/// Requires `success: true` and a `data` object; anything else is
/// [`NormalizeError::Unsuccessful`]. Undecodable bodies surface as
/// [`NormalizeError::Json`]. Neither is fatal to the caller - the
/// orchestrator converts both to an absent result.
pub fn parse_account_info(body: &str) -> Result<AccountInfo, NormalizeError> {
    let envelope: AccountEnvelope = serde_json::from_str(body)?;

    match envelope {
        AccountEnvelope {
            success: true,
            data: Some(data),
        } => Ok(data.into_account_info()),
        _ => Err(NormalizeError::Unsuccessful),
    }
}

/// Parses a key listing response body.
///
/// Never fails: unsuccessful envelopes, undecodable bodies, and
/// unrecognized `data` shapes all yield an empty, [`ListShape::Unmatched`]
/// outcome, matching how the dashboard treats such sites as having zero
/// keys.
pub fn parse_api_key_list(body: &str) -> KeyListOutcome {
    let envelope: KeyListEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(error = %e, "Undecodable key listing body");
            return KeyListOutcome::unmatched();
        }
    };

    let Some(data) = envelope.data.filter(|_| envelope.success) else {
        return KeyListOutcome::unmatched();
    };

    for (shape, matcher) in SHAPE_MATCHERS {
        if let Some(items) = matcher(&data) {
            debug!(shape = ?shape, count = items.len(), "Matched key listing shape");
            let records = items
                .iter()
                .filter_map(|item| {
                    serde_json::from_value::<ApiKeyItem>(item.clone())
                        .map_err(|e| warn!(error = %e, "Skipping undecodable key item"))
                        .ok()
                })
                .map(ApiKeyItem::into_record)
                .collect();
            return KeyListOutcome {
                records,
                shape: *shape,
            };
        }
    }

    warn!("Key listing data matched no known shape");
    KeyListOutcome::unmatched()
}

/// Reads just the `success` flag of a response body.
///
/// Credential validation accepts `{"success": true}` even when `data` is
/// missing, so it cannot reuse [`parse_account_info`].
pub fn parse_success_flag(body: &str) -> Result<bool, NormalizeError> {
    let envelope: SuccessEnvelope = serde_json::from_str(body)?;
    Ok(envelope.success)
}

/// Parses a check-in response body.
///
/// Maps `success`/`message` straight through; an undecodable body becomes a
/// failed outcome carrying the decode error text.
pub fn parse_check_in(body: &str) -> CheckInOutcome {
    match serde_json::from_str::<CheckInEnvelope>(body) {
        Ok(envelope) => CheckInOutcome {
            succeeded: envelope.success,
            message: envelope.message,
        },
        Err(e) => CheckInOutcome::failure(format!("undecodable check-in response: {e}")),
    }
}

// ============================================================================
// Tests
// ============================================================================
