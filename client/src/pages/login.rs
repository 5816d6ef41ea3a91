//! Login page: matrícula + senha sent as HTTP Basic credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::{ApiError, GENERIC_ERROR_MESSAGE, VotingApi};
use crate::net::types::SessionUser;

/// Route the browser lands on after a successful login.
pub const POST_LOGIN_ROUTE: &str = "/votacao";

/// Outcome of a login attempt, decided before touching the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Navigate away after remembering `user`.
    Navigate { user: SessionUser },
    /// Show a blocking alert.
    Alert(&'static str),
}

/// Issue exactly one login request and decide what the page does next.
///
/// Invalid credentials and server errors are treated the same way. A 2xx
/// reply without a user body still logs in, as a user with no roles.
pub async fn attempt_login<A: VotingApi>(api: &A, matricula: &str, senha: &str) -> LoginOutcome {
    match api.login(matricula, senha).await {
        Ok(user) => LoginOutcome::Navigate { user: user.unwrap_or_default() },
        Err(err) => {
            log_login_failure(&err);
            LoginOutcome::Alert(GENERIC_ERROR_MESSAGE)
        }
    }
}

fn log_login_failure(err: &ApiError) {
    leptos::logging::warn!("login failed: {err}");
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let matricula = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let matricula_value = matricula.get();
            let senha_value = senha.get();
            leptos::task::spawn_local(async move {
                let outcome = attempt_login(&crate::net::api::HttpApi, &matricula_value, &senha_value).await;
                let Some(window) = web_sys::window() else {
                    return;
                };
                match outcome {
                    LoginOutcome::Navigate { user } => {
                        crate::util::session_store::remember_session_user(&user);
                        let _ = window.location().set_href(POST_LOGIN_ROUTE);
                    }
                    LoginOutcome::Alert(message) => {
                        let _ = window.alert_with_message(message);
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Matricula SIGA"
                    prop:value=move || matricula.get()
                    on:input=move |ev| matricula.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Senha SIGA"
                    prop:value=move || senha.get()
                    on:input=move |ev| senha.set(event_target_value(&ev))
                />
                <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
            </form>
        </div>
    }
}
