//! Vote display page: one read-only panel per committee.

#[cfg(test)]
#[path = "vote_display_test.rs"]
mod vote_display_test;

use leptos::prelude::*;

use crate::components::committee_vote_panel::CommitteeVotePanel;
use crate::components::layout::{Breadcrumb, Layout};
use crate::components::route_gate::AuthGate;
use crate::net::api::VotingApi;
use crate::net::types::CommitteeVote;
use crate::state::notifications::Notification;
use crate::state::voting::statements_load_failed;

/// Fetch the vote snapshot once; a failure becomes the toast to show.
pub async fn load_vote_snapshot<A: VotingApi>(api: &A) -> Result<Vec<CommitteeVote>, Notification> {
    api.vote_snapshot().await.map_err(|err| statements_load_failed(&err))
}

#[component]
pub fn VoteDisplayPage() -> impl IntoView {
    view! {
        <AuthGate>
            <Layout>
                <Breadcrumb label="Votação"/>
                <VoteDisplay/>
            </Layout>
        </AuthGate>
    }
}

#[component]
fn VoteDisplay() -> impl IntoView {
    let snapshot = RwSignal::new(Vec::<CommitteeVote>::new());

    #[cfg(feature = "hydrate")]
    {
        let notifications = expect_context::<RwSignal<crate::state::notifications::NotificationState>>();
        leptos::task::spawn_local(async move {
            match load_vote_snapshot(&crate::net::api::HttpApi).await {
                Ok(entries) => snapshot.set(entries),
                Err(notification) => crate::components::notification_toasts::notify(notifications, notification),
            }
        });
    }

    view! {
        <div class="row vote-display">
            {move || {
                let panels = snapshot
                    .get()
                    .into_iter()
                    .map(|vote| view! { <CommitteeVotePanel vote=vote/> })
                    .collect::<Vec<_>>();
                panels
            }}
        </div>
    }
}
