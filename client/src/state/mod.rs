//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `notifications`, `voting`, ...) so
//! pages depend on small focused models and keep their derivations testable
//! without a browser.

pub mod auth;
pub mod members;
pub mod notifications;
pub mod voting;
