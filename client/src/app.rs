//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::notification_toasts::NotificationToasts;
use crate::pages::{
    act::ActPage, login::LoginPage, members::MembersPage, vote_control::VoteControlPage, vote_display::VoteDisplayPage,
};
use crate::state::{auth::AuthState, notifications::NotificationState};

const PDFMAKE_SCRIPT: &str = "https://cdnjs.cloudflare.com/ajax/libs/pdfmake/0.2.10/pdfmake.min.js";
const PDFMAKE_FONTS_SCRIPT: &str = "https://cdnjs.cloudflare.com/ajax/libs/pdfmake/0.2.10/vfs_fonts.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=PDFMAKE_SCRIPT defer></script>
                <script src=PDFMAKE_FONTS_SCRIPT defer></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and notification contexts and sets up client-side
/// routing. Auth starts out loading and resolves from browser storage once
/// the app is hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notifications = RwSignal::new(NotificationState::default());

    provide_context(auth);
    provide_context(notifications);

    Effect::new(move || {
        auth.set(AuthState::resolved(crate::util::session_store::load_session_user()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/comissao-admin.css"/>
        <Title text="Comissões"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/votacao"/> }/>
                <Route path=StaticSegment("votacao") view=VoteDisplayPage/>
                <Route path=StaticSegment("membros") view=MembersPage/>
                <Route path=StaticSegment("controle-votacao") view=VoteControlPage/>
                <Route path=StaticSegment("ato-ocorrencia") view=ActPage/>
            </Routes>
        </Router>
        <NotificationToasts/>
    }
}
