//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated redirect behavior, and
//! role-gated pages share one intersection check.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Roles allowed on the voting control page.
pub const VOTE_CONTROL_ROLES: &[&str] = &["PRESIDENTE", "PRESIDENTA", "RELATOR", "RELATORA"];

/// Roles allowed on the act generation page.
pub const ACT_ROLES: &[&str] = &["ASSESSORIA", "PROGRAMADOR"];

/// True when any session role appears in `allow`.
#[must_use]
pub fn roles_allow(session_roles: &[String], allow: &[&str]) -> bool {
    session_roles.iter().any(|role| allow.contains(&role.as_str()))
}

/// True once auth has loaded and no user is known.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// True when a gated page may render for `state`.
#[must_use]
pub fn page_visible(state: &AuthState, allow: &[&str]) -> bool {
    !state.loading && roles_allow(state.roles(), allow)
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
