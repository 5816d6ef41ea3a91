//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and presentation widgets while reading
//! shared state from Leptos context providers.

pub mod committee_vote_panel;
pub mod layout;
pub mod notification_toasts;
pub mod route_gate;
pub mod statement_card;
pub mod vote_control_modal;
