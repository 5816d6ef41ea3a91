//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues same-origin REST calls (the host forwards `/api/*` upstream)
//! and `types` defines the wire schema shared by every page.

pub mod api;
#[cfg(test)]
pub(crate) mod fake_api;
pub mod types;
