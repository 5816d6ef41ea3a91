//! Card for one statement on the voting control grid.

use leptos::prelude::*;

use crate::net::types::Statement;

#[component]
pub fn StatementCard(statement: Statement, on_manage: Callback<Statement>) -> impl IntoView {
    let code = statement.display_code();
    let active = statement.is_active();
    let text = statement.statement_text.clone();

    view! {
        <div class="col-lg-4 col-md-6 col-12">
            <div class="statement-card" class:statement-card--active=active>
                <div class="statement-card__header">
                    <span class="statement-card__code">{code}</span>
                    <Show when=move || active>
                        <span class="badge badge--live">"Em votação"</span>
                    </Show>
                </div>
                <p class="statement-card__text">{text}</p>
                <button class="btn btn--primary" on:click=move |_| on_manage.run(statement.clone())>
                    "Gerenciar"
                </button>
            </div>
        </div>
    }
}
