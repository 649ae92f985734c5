//! Core types for Driftwood.
//!
//! This module provides the wire-facing domain types shared by the portal.

pub mod credential;
pub mod id;
pub mod product;

pub use credential::Credential;
pub use id::ProductId;
pub use product::ProductRecord;
