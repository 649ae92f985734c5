//! HTTP middleware for the portal.
//!
//! The only middleware the portal carries itself is the access-gate
//! extractor; request tracing comes from `tower-http` in the router.

pub mod auth;

pub use auth::{RequireAuth, Visitor};
