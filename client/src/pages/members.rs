//! Committee members page: roster grouped by role, plus a roster PDF.
//!
//! Fetch failures are logged and otherwise ignored; whatever loaded still
//! renders.

#[cfg(test)]
#[path = "members_test.rs"]
mod members_test;

use leptos::prelude::*;

use crate::components::layout::{Breadcrumb, Layout};
use crate::components::route_gate::AuthGate;
use crate::net::api::VotingApi;
use crate::net::types::{Committee, Member};
use crate::state::auth::AuthState;
use crate::state::members::CommitteeRoster;
use crate::util::pdf::{build_roster_document, open_pdf};

/// Data the members page renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MembersPageData {
    pub committees: Vec<Committee>,
    /// Committee whose roster is shown; the first committee by default.
    pub selected: Option<i64>,
    pub members: Vec<Member>,
}

impl MembersPageData {
    #[must_use]
    pub fn roster(&self) -> CommitteeRoster {
        self.selected
            .map(|id| CommitteeRoster::for_committee(&self.members, id))
            .unwrap_or_default()
    }
}

/// Load committees, then members.
///
/// Members are only requested when at least one committee exists. Either
/// failure leaves its part empty.
pub async fn load_members_page<A: VotingApi>(api: &A) -> MembersPageData {
    let committees = api.committees().await.unwrap_or_else(|err| {
        leptos::logging::warn!("committee load failed: {err}");
        Vec::new()
    });
    let Some(first) = committees.first().map(|c| c.committee_id) else {
        return MembersPageData::default();
    };
    let members = api.members().await.unwrap_or_else(|err| {
        leptos::logging::warn!("member load failed: {err}");
        Vec::new()
    });
    MembersPageData { committees, selected: Some(first), members }
}

/// The committee select only appears for statistics users with a choice to make.
#[must_use]
pub fn show_committee_select(auth: &AuthState, committees: &[Committee]) -> bool {
    committees.len() > 1 && auth.can_view_statistics()
}

#[component]
pub fn MembersPage() -> impl IntoView {
    view! {
        <AuthGate>
            <Layout>
                <Breadcrumb label="Membros"/>
                <MembersView/>
            </Layout>
        </AuthGate>
    }
}

#[component]
fn MembersView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let data = RwSignal::new(MembersPageData::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let loaded = load_members_page(&crate::net::api::HttpApi).await;
        data.set(loaded);
    });

    let roster = Memo::new(move |_| data.with(MembersPageData::roster));

    let on_select = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        data.update(|d| d.selected = value.parse().ok());
    };

    let on_pdf = move |_| {
        if let Err(err) = open_pdf(&build_roster_document(&roster.get_untracked())) {
            leptos::logging::warn!("roster pdf failed: {err}");
        }
    };

    view! {
        <div class="members">
            <div class="members__toolbar">
                <Show when=move || data.with(|d| show_committee_select(&auth.get(), &d.committees))>
                    <select
                        class="members__select"
                        prop:value=move || data.with(|d| d.selected.map(|id| id.to_string()).unwrap_or_default())
                        on:change=on_select
                    >
                        {move || {
                            let options = data
                                .get()
                                .committees
                                .into_iter()
                                .map(|c| view! { <option value=c.committee_id.to_string()>{c.committee_name}</option> })
                                .collect::<Vec<_>>();
                            options
                        }}
                    </select>
                </Show>
                <button class="btn btn--primary" on:click=on_pdf>
                    "Gerar PDF"
                </button>
            </div>
            {move || {
                let r = roster.get();
                let president_name = r.president.as_ref().map(|p| p.nome.clone()).unwrap_or_default();
                let relator_names = r.relators.iter().map(|m| m.nome.clone()).collect::<Vec<_>>().join(", ");
                view! {
                    <div class="members__leaders">
                        <div class="members__leader">
                            <strong>{president_name}</strong>
                            <span>{r.president_label()}</span>
                        </div>
                        <div class="members__leader">
                            <strong>{relator_names}</strong>
                            <span>{r.relators_label()}</span>
                        </div>
                    </div>
                    <MemberGroup title=r.specialists_label().to_owned() members=r.specialists.clone()/>
                    <MemberGroup title=r.jurists_label().to_owned() members=r.jurists.clone()/>
                    <MemberGroup title=r.members_heading() members=r.members.clone()/>
                }
            }}
        </div>
    }
}

#[component]
fn MemberGroup(title: String, members: Vec<Member>) -> impl IntoView {
    let rows = members
        .into_iter()
        .map(|m| view! { <li class="members__row">{m.nome}</li> })
        .collect::<Vec<_>>();
    view! {
        <section class="members__group">
            <h6 class="members__heading">{title}</h6>
            <ul class="members__list">{rows}</ul>
        </section>
    }
}
