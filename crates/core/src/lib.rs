//! Driftwood Core - Shared types and session state machine.
//!
//! This crate provides the pieces of Driftwood that do not touch the network
//! or the filesystem:
//! - the session/authentication state machine driven by the portal
//! - the verifier verdict type and its wire-shape parser
//! - the access-gate decision evaluated by every protected view
//! - the product record and the pure content-resolution helpers
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no timers. The portal binary supplies the collaborators (the
//! credential verifier, the catalog feed) and the clock; everything here can
//! be exercised in a plain unit test.
//!
//! # Modules
//!
//! - [`session`] - Session states, transitions, and attempt tracking
//! - [`verdict`] - Credential verifier verdicts
//! - [`gate`] - Access-gate decisions and welcome-overlay derivation
//! - [`resolve`] - Catalog lookup and rich-text resolution helpers
//! - [`types`] - Product records, identifiers, and credentials

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod gate;
pub mod resolve;
pub mod session;
pub mod types;
pub mod verdict;

pub use gate::{GateDecision, overlay_visible};
pub use session::{AttemptId, Session, SessionState};
pub use types::{Credential, ProductId, ProductRecord};
pub use verdict::Verdict;
