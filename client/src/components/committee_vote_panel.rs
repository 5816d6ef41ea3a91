//! Read-only panel showing one committee's current vote.

use leptos::prelude::*;

use crate::net::types::{CommitteeVote, format_statement_code};

#[component]
pub fn CommitteeVotePanel(vote: CommitteeVote) -> impl IntoView {
    let tally = vote.votos;
    let current = vote.enunciado.map(|s| {
        let code = format_statement_code(vote.committee_id, s.codigo);
        let phase = s.estado_votacao.map_or("Aguardando", |p| p.label());
        (code, s.statement_text, phase)
    });

    view! {
        <div class="col-lg-6 col-12">
            <section class="vote-panel">
                <h5 class="vote-panel__committee">{vote.committee_name}</h5>
                {match current {
                    Some((code, text, phase)) => {
                        view! {
                            <div class="vote-panel__statement">
                                <span class="vote-panel__code">{code}</span>
                                <span class="vote-panel__phase">{phase}</span>
                                <p class="vote-panel__text">{text}</p>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! { <p class="vote-panel__idle">"Nenhum enunciado em votação."</p> }.into_any(),
                }}
                <dl class="vote-panel__tally">
                    <dt>"A favor"</dt>
                    <dd>{tally.favor}</dd>
                    <dt>"Contra"</dt>
                    <dd>{tally.contra}</dd>
                    <dt>"Abstenções"</dt>
                    <dd>{tally.abstencao}</dd>
                    <dt>"Total"</dt>
                    <dd>{tally.total()}</dd>
                </dl>
            </section>
        </div>
    }
}
