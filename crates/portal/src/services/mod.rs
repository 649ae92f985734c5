//! Service layer for the portal.

pub mod auth;
pub mod verifier;
