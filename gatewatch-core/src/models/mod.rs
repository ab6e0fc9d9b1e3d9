//! Domain models for gatewatch.
//!
//! Organized into focused submodules:
//! - [`site`] - Site kinds, request profiles, credentials
//! - [`account`] - Canonical account information
//! - [`api_key`] - Canonical API key records
//! - [`check_in`] - Check-in and refresh outcomes

pub mod account;
pub mod api_key;
pub mod check_in;
pub mod site;

pub use account::AccountInfo;
pub use api_key::ApiKeyRecord;
pub use check_in::{CheckInOutcome, SiteSnapshot};
pub use site::{SiteCredential, SiteKind, SiteProfile};
