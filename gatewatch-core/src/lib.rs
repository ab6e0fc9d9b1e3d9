// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # gatewatch Core
//!
//! Core types, models, and traits for the gatewatch dashboard.
//!
//! This crate provides the foundational abstractions shared by the site
//! adapter and the (external) CRUD/web layer:
//!
//! - Domain models (site kinds, credentials, account info, API keys)
//! - The per-fork request profile table
//! - The [`SiteApi`] trait the adapter implements
//!
//! ## Key Types
//!
//! ### Site Types
//! - [`SiteKind`] - Enum of supported gateway forks
//! - [`SiteProfile`] - Per-fork header name and check-in path
//! - [`SiteCredential`] - Location + credentials of one site
//!
//! ### Canonical Models
//! - [`AccountInfo`] - Account state on one site
//! - [`ApiKeyRecord`] - One entry of a site's key listing
//! - [`CheckInOutcome`] - Result of a daily check-in
//! - [`SiteSnapshot`] - Joined refresh result

pub mod models;
pub mod traits;

// Re-export all model types
pub use models::{
    AccountInfo, ApiKeyRecord, CheckInOutcome, SiteCredential, SiteKind, SiteProfile,
    SiteSnapshot,
};

// Re-export traits
pub use traits::SiteApi;
