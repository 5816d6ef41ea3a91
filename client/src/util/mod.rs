//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers, the
//! PDF helper) from page and component logic to improve reuse and testability.

pub mod auth;
pub mod pdf;
pub mod retry;
pub mod session_store;
