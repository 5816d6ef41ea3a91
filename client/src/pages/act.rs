//! Act generation page: pick a committee, get its act as a PDF.

#[cfg(test)]
#[path = "act_test.rs"]
mod act_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::layout::{Breadcrumb, Layout};
use crate::components::route_gate::RoleGate;
use crate::net::api::{ADMITTED_LEVEL, VotingApi};
use crate::net::types::Committee;
use crate::state::members::CommitteeRoster;
use crate::state::notifications::Notification;
use crate::state::voting::committees_load_failed;
use crate::util::auth::ACT_ROLES;
use crate::util::pdf::build_act_document;

pub const ACT_FAILED: &str = "Não foi possível gerar o ato.";

/// Committees listed on the page; a failure becomes the toast to show.
pub async fn load_act_committees<A: VotingApi>(api: &A) -> Result<Vec<Committee>, Notification> {
    api.committees().await.map_err(|err| committees_load_failed(&err))
}

/// Fetch admitted enrollments and members for `committee` and build its act.
///
/// Enrollments are requested first; members are skipped when that fails.
pub async fn build_act<A: VotingApi>(api: &A, committee: &Committee) -> Result<Value, Notification> {
    let enrollments = api
        .enrollments(ADMITTED_LEVEL, committee.committee_id)
        .await
        .map_err(|err| Notification::error(ACT_FAILED, err.display_message()))?;
    let members = api
        .members()
        .await
        .map_err(|err| Notification::error(ACT_FAILED, err.display_message()))?;
    let roster = CommitteeRoster::for_committee(&members, committee.committee_id);
    Ok(build_act_document(committee, &roster, &enrollments))
}

#[component]
pub fn ActPage() -> impl IntoView {
    view! {
        <RoleGate allow=ACT_ROLES>
            <Layout>
                <Breadcrumb label="Ato de ocorrência"/>
                <ActGenerator/>
            </Layout>
        </RoleGate>
    }
}

#[component]
fn ActGenerator() -> impl IntoView {
    let committees = RwSignal::new(Vec::<Committee>::new());
    let generating = RwSignal::new(None::<i64>);
    #[cfg(feature = "hydrate")]
    let notifications = expect_context::<RwSignal<crate::state::notifications::NotificationState>>();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match load_act_committees(&crate::net::api::HttpApi).await {
                Ok(list) => committees.set(list),
                Err(notification) => crate::components::notification_toasts::notify(notifications, notification),
            }
        });
    }

    let on_generate = move |committee: Committee| {
        if generating.get_untracked().is_some() {
            return;
        }
        generating.set(Some(committee.committee_id));

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match build_act(&crate::net::api::HttpApi, &committee).await {
                    Ok(document) => {
                        if let Err(err) = crate::util::pdf::open_pdf(&document) {
                            leptos::logging::warn!("act pdf failed: {err}");
                        }
                    }
                    Err(notification) => crate::components::notification_toasts::notify(notifications, notification),
                }
                generating.set(None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = committee;
            generating.set(None);
        }
    };

    view! {
        <table class="table act-table">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Comissão"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    committees
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, committee)| {
                            let id = committee.committee_id;
                            let name = committee.committee_name.clone();
                            view! {
                                <tr>
                                    <td>{i + 1}</td>
                                    <td>{name}</td>
                                    <td>
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || generating.get() == Some(id)
                                            on:click=move |_| on_generate(committee.clone())
                                        >
                                            "Gerar ato"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
