//! Domain models owned by the portal.

pub mod session;

pub use session::SharedSession;
