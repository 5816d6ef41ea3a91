//! Page chrome: navigation bar, user badge and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated page renders inside `Layout`. Links to role-gated pages
//! only appear for sessions that would pass the gate.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::{ACT_ROLES, VOTE_CONTROL_ROLES, page_visible};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let user_name = move || auth.get().user.map(|u| u.nome).unwrap_or_default();

    let on_logout = move |_| {
        crate::util::session_store::forget_session_user();
        auth.set(AuthState::resolved(None));
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <div class="layout">
            <nav class="layout__nav">
                <a class="layout__brand" href="/votacao">"Comissões"</a>
                <a class="layout__link" href="/votacao">"Votação"</a>
                <a class="layout__link" href="/membros">"Membros"</a>
                <Show when=move || page_visible(&auth.get(), VOTE_CONTROL_ROLES)>
                    <a class="layout__link" href="/controle-votacao">"Controle da votação"</a>
                </Show>
                <Show when=move || page_visible(&auth.get(), ACT_ROLES)>
                    <a class="layout__link" href="/ato-ocorrencia">"Ato"</a>
                </Show>
                <span class="layout__spacer"></span>
                <span class="layout__user">{user_name}</span>
                <button class="btn layout__logout" on:click=on_logout>
                    "Sair"
                </button>
            </nav>
            <main class="layout__content">{children()}</main>
        </div>
    }
}

/// Single-level breadcrumb shown at the top of a page.
#[component]
pub fn Breadcrumb(label: &'static str) -> impl IntoView {
    view! {
        <ol class="breadcrumb">
            <li class="breadcrumb__item breadcrumb__item--active">{label}</li>
        </ol>
    }
}
