//! Modal with the four vote lifecycle buttons for the managed statement.
//!
//! The modal has no close affordance: it stays up while a statement is
//! managed and goes away when a reload finds no active statement.

use leptos::prelude::*;

use crate::net::types::Statement;
use crate::state::voting::ControlAction;

#[component]
pub fn VoteControlModal(statement: Statement, busy: RwSignal<bool>, on_action: Callback<ControlAction>) -> impl IntoView {
    let code = statement.display_code();

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--vote-control" role="dialog" aria-modal="true">
                <header class="dialog__header">
                    "Controle da votação "
                    <h6 class="dialog__code">{code}</h6>
                </header>
                <div class="dialog__body">
                    <span class="dialog__statement">{statement.statement_text}</span>
                    <hr class="dialog__rule"/>
                    {ControlAction::ALL
                        .into_iter()
                        .map(|action| {
                            view! {
                                <button
                                    class="btn btn--primary btn--block"
                                    disabled=move || busy.get()
                                    on:click=move |_| on_action.run(action)
                                >
                                    {action.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
