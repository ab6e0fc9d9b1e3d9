// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # gatewatch Adapter
//!
//! The multi-fork site adapter for the gatewatch dashboard.
//!
//! This crate talks to the heterogeneous gateway HTTP APIs (new-api,
//! veloera, voapi, one-hub), normalizes their divergent JSON shapes into the
//! canonical `gatewatch-core` models, and degrades gracefully when a remote
//! misbehaves. It is organized the way the response flows:
//!
//! - [`request`] - Header and URL construction per fork
//! - [`normalize`] - Envelope-tolerant response parsing
//! - [`adapter`] - The [`SiteAdapter`] orchestrator implementing
//!   [`SiteApi`](gatewatch_core::SiteApi)
//! - [`error`] - The internal failure taxonomy
//!
//! ## Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use gatewatch_adapter::SiteAdapter;
//! use gatewatch_core::{SiteApi, SiteCredential, SiteKind};
//!
//! let adapter = SiteAdapter::new(Duration::from_secs(10))?;
//! let credential = SiteCredential::new("https://x.test", "tok", 7, SiteKind::NewApi);
//!
//! if adapter.validate(&credential).await {
//!     let snapshot = adapter.refresh(&credential).await;
//! }
//! ```
//!
//! No operation ever returns an error to the caller: transport faults,
//! non-2xx statuses, malformed JSON, and `success: false` payloads all
//! collapse to the operation's degraded value, so one failing site cannot
//! abort a fan-out over many.

pub mod adapter;
pub mod error;
pub mod normalize;
pub mod request;

// Re-export key types
pub use adapter::SiteAdapter;
pub use error::{AdapterError, NormalizeError};
pub use normalize::{KeyListOutcome, ListShape};
pub use request::Operation;

#[cfg(test)]
mod normalize_edge_tests;
