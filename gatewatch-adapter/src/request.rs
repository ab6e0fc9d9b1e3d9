//! Outbound request construction.
//!
//! Headers and URLs are rebuilt from the credential on every call; nothing
//! here caches or mutates.

use gatewatch_core::SiteCredential;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::AdapterError;

// ============================================================================
// Operation
// ============================================================================

/// Account info endpoint, shared by all forks.
const ACCOUNT_INFO_PATH: &str = "/api/user/self";

/// Key listing endpoint. Pagination is fixed to the first page of ten; the
/// dashboard shows a summary, not a key browser.
const KEY_LIST_PATH: &str = "/api/token/?p=0&size=10";

/// One of the remote operations, used to pick the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// GET account information.
    AccountInfo,
    /// GET the first page of API keys.
    KeyList,
    /// POST the daily check-in.
    CheckIn,
}

impl Operation {
    /// Path for this operation under the given credential's fork.
    ///
    /// Only check-in varies per fork (voapi calls it `clock_in`).
    pub fn path(&self, credential: &SiteCredential) -> &'static str {
        match self {
            Self::AccountInfo => ACCOUNT_INFO_PATH,
            Self::KeyList => KEY_LIST_PATH,
            Self::CheckIn => credential.kind.profile().check_in_path,
        }
    }

    /// Stable name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AccountInfo => "account_info",
            Self::KeyList => "key_list",
            Self::CheckIn => "check_in",
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Builds the header set for any request to the credential's site.
///
/// Always carries the bearer token and a JSON content type. The per-user
/// header is added for every fork except One Hub, which does not scope
/// requests by user.
pub fn build_headers(credential: &SiteCredential) -> Result<HeaderMap, AdapterError> {
    let mut headers = HeaderMap::new();

    let auth_value = format!("Bearer {}", credential.access_token);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&auth_value)
            .map_err(|e| AdapterError::InvalidHeader(e.to_string()))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(user_header) = credential.kind.profile().user_header {
        headers.insert(
            HeaderName::from_static(user_header),
            HeaderValue::from(credential.remote_user_id),
        );
    }

    Ok(headers)
}

/// Builds the absolute URL for an operation.
///
/// `base_url` is concatenated verbatim; callers supply scheme + host without
/// a trailing slash.
pub fn build_url(credential: &SiteCredential, operation: Operation) -> String {
    format!("{}{}", credential.base_url, operation.path(credential))
}

// ============================================================================
// Tests
// ============================================================================
