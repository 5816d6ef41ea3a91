//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route gates and the layout to coordinate login redirects and
//! role-dependent rendering. The session itself lives in server cookies; this
//! only remembers who logged in so pages can decide what to show.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;

/// Authentication state tracking the current user and loading status.
///
/// Starts in `loading` so server-rendered markup and the first hydrated
/// render agree; the browser resolves the stored user right after hydration.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Resolved state for a known (or absent) user.
    #[must_use]
    pub fn resolved(user: Option<SessionUser>) -> Self {
        Self { user, loading: false }
    }

    /// Role names of the current session; empty when logged out.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        self.user.as_ref().map_or(&[], |u| u.funcoes.as_slice())
    }

    #[must_use]
    pub fn can_view_statistics(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.permissoes.estatistica)
    }
}
