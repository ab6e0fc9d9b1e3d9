//! Site-related types.
//!
//! This module contains the types describing a registered gateway site:
//! - [`SiteKind`] - Enum of supported gateway forks
//! - [`SiteProfile`] - Per-fork request quirks (header name, check-in path)
//! - [`SiteCredential`] - Everything needed to talk to one site

use serde::{Deserialize, Serialize};

// ============================================================================
// Site Kind
// ============================================================================

/// Supported gateway forks.
///
/// The forks are API-compatible but differ in the per-user header name they
/// expect and, for voapi, the check-in path. The set is closed: a site is
/// registered with one of these kinds and keeps it for its lifetime.
///
/// Unknown labels (from a newer dashboard build or a hand-edited record)
/// deserialize to [`SiteKind::NewApi`]. That fallback is deliberate: new-api
/// is the ancestor fork and every other fork still answers its protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SiteKind {
    /// Veloera fork.
    Veloera,
    /// VoAPI fork.
    Voapi,
    /// One Hub fork (no per-user header).
    OneHub,
    /// new-api, the ancestor fork.
    #[default]
    #[serde(other)]
    NewApi,
}

impl SiteKind {
    /// Returns the display name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::NewApi => "New API",
            Self::Veloera => "Veloera",
            Self::Voapi => "VoAPI",
            Self::OneHub => "One Hub",
        }
    }

    /// Returns the stored label for this kind (kebab-case, as persisted).
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewApi => "new-api",
            Self::Veloera => "veloera",
            Self::Voapi => "voapi",
            Self::OneHub => "one-hub",
        }
    }

    /// Returns all supported kinds.
    pub fn all() -> &'static [SiteKind] {
        &[Self::NewApi, Self::Veloera, Self::Voapi, Self::OneHub]
    }

    /// Parses a stored label into a kind.
    ///
    /// Unrecognized labels fall back to [`SiteKind::NewApi`]. This is the
    /// single place that policy lives outside the serde boundary.
    pub fn from_label(label: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.label() == label)
            .unwrap_or_default()
    }

    /// Resolves the request profile for this kind.
    ///
    /// Pure lookup over the closed set; no fallback arm is needed because
    /// unknown labels were already collapsed to `NewApi` at parse time.
    pub fn profile(&self) -> SiteProfile {
        match self {
            Self::NewApi => SiteProfile {
                user_header: Some("new-api-user"),
                check_in_path: "/api/user/check_in",
            },
            Self::Veloera => SiteProfile {
                user_header: Some("veloera-user"),
                check_in_path: "/api/user/check_in",
            },
            Self::Voapi => SiteProfile {
                user_header: Some("voapi-user"),
                check_in_path: "/api/user/clock_in",
            },
            Self::OneHub => SiteProfile {
                user_header: None,
                check_in_path: "/api/user/check_in",
            },
        }
    }
}

impl std::fmt::Display for SiteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Site Profile
// ============================================================================

/// Per-fork request quirks resolved from a [`SiteKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteProfile {
    /// Header carrying the remote user id, or `None` when the fork does not
    /// scope requests per user (One Hub).
    pub user_header: Option<&'static str>,
    /// Path of the daily check-in endpoint.
    pub check_in_path: &'static str,
}

// ============================================================================
// Site Credential
// ============================================================================

/// Credentials and location of one registered site.
///
/// Owned by the caller (the CRUD layer); the adapter reads it per call and
/// never persists it. `remote_user_id` is required and meaningful for every
/// kind except [`SiteKind::OneHub`], where it is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteCredential {
    /// Absolute origin of the site, scheme + host, no trailing slash.
    ///
    /// Used verbatim when building URLs; a trailing slash produces a double
    /// slash in every request path.
    pub base_url: String,
    /// Opaque access token, sent as a bearer credential.
    pub access_token: String,
    /// The caller's user id on the remote site.
    pub remote_user_id: i64,
    /// Which fork the site runs.
    pub kind: SiteKind,
}

impl SiteCredential {
    /// Creates a credential for the given site.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        remote_user_id: i64,
        kind: SiteKind,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            remote_user_id,
            kind,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
