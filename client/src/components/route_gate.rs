//! Route wrappers that decide whether a page renders for the current session.
//!
//! Both gates redirect to `/login` once auth has resolved without a user.
//! `RoleGate` additionally renders nothing unless a session role is on the
//! allow-list.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{install_unauth_redirect, page_visible};

/// Render `children` for any logged-in user.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    move || {
        let state = auth.get();
        (!state.loading && state.user.is_some()).then(|| children())
    }
}

/// Render `children` only when a session role intersects `allow`.
#[component]
pub fn RoleGate(allow: &'static [&'static str], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    move || page_visible(&auth.get(), allow).then(|| children())
}
