//! Voting control page for committee presidents and relators.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists unfinished statements (optionally filtered by committee) and drives
//! the server-side vote lifecycle of the active one through a modal. Mount
//! loads retry every second until they succeed; statement loads give up when
//! the server reports the voting date has not arrived. At most one retrying
//! statement load runs at a time, and all retries stop when the page
//! unmounts.

#[cfg(test)]
#[path = "vote_control_test.rs"]
mod vote_control_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::layout::{Breadcrumb, Layout};
use crate::components::route_gate::RoleGate;
use crate::components::statement_card::StatementCard;
use crate::components::vote_control_modal::VoteControlModal;
use crate::net::types::Statement;
use crate::state::notifications::{Notification, NotificationState};
use crate::state::voting::{
    ActionReport, CommitteeFilter, ControlAction, VotingControlState, committee_options, statements_load_failed,
};
use crate::util::auth::VOTE_CONTROL_ROLES;
use crate::util::retry::{Lifetime, RetryDecision, statement_retry};

/// What the page does once an action report comes back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionFollowUp {
    /// Toasts in display order.
    pub notifications: Vec<Notification>,
    /// Fresh statement snapshot to apply, when the reload succeeded.
    pub statements: Option<Vec<Statement>>,
    /// Delay before the statement load is retried, when the reload failed.
    pub retry_after: Option<Duration>,
}

/// Translate an [`ActionReport`] into page effects.
///
/// A failed reload adds its own toast and follows the statement retry policy.
#[must_use]
pub fn follow_up(report: ActionReport) -> ActionFollowUp {
    let mut notifications = vec![report.notification];
    match report.statements {
        Ok(statements) => ActionFollowUp { notifications, statements: Some(statements), retry_after: None },
        Err(err) => {
            notifications.push(statements_load_failed(&err));
            let retry_after = match statement_retry(&err) {
                RetryDecision::RetryAfter(delay) => Some(delay),
                RetryDecision::Stop => None,
            };
            ActionFollowUp { notifications, statements: None, retry_after }
        }
    }
}

#[component]
pub fn VoteControlPage() -> impl IntoView {
    view! {
        <RoleGate allow=VOTE_CONTROL_ROLES>
            <Layout>
                <Breadcrumb label="Controle da votação"/>
                <VoteControl/>
            </Layout>
        </RoleGate>
    }
}

#[component]
fn VoteControl() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let state = RwSignal::new(VotingControlState::default());
    let busy = RwSignal::new(false);

    let lifetime = Lifetime::new();
    let page_lifetime = lifetime.clone();
    on_cleanup(move || page_lifetime.end());

    #[cfg(feature = "hydrate")]
    {
        loaders::spawn_committee_load(lifetime.clone(), state, notifications);
        loaders::spawn_statement_load(lifetime.clone(), state, notifications, None);
    }

    let on_manage = Callback::new(move |statement: Statement| {
        state.update(|s| s.managed = Some(statement));
    });

    let on_action = Callback::new(move |action: ControlAction| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let lifetime = lifetime.clone();
            leptos::task::spawn_local(async move {
                let managed = state.with_untracked(|s| s.managed.clone());
                let report =
                    crate::state::voting::perform_action(&crate::net::api::HttpApi, action, managed.as_ref()).await;
                if !lifetime.is_alive() {
                    return;
                }
                busy.set(false);
                let effects = follow_up(report);
                for notification in effects.notifications {
                    crate::components::notification_toasts::notify(notifications, notification);
                }
                if let Some(statements) = effects.statements {
                    state.update(|s| s.apply_statements(statements));
                }
                if let Some(delay) = effects.retry_after {
                    loaders::spawn_statement_load(lifetime, state, notifications, Some(delay));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (action, &lifetime, notifications);
        }
    });

    let on_filter = move |ev: leptos::ev::Event| {
        let filter = CommitteeFilter::from_select_value(&event_target_value(&ev));
        state.update(|s| s.filter = filter);
    };

    view! {
        <div class="vote-control">
            <div class="vote-control__toolbar">
                <select
                    class="vote-control__select"
                    prop:value=move || state.with(|s| s.filter.select_value())
                    on:change=on_filter
                >
                    {move || {
                        state
                            .with(|s| committee_options(&s.committees))
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
            <div class="row vote-control__grid">
                {move || {
                    let cards = state.with(|s| s.visible().into_iter().cloned().collect::<Vec<_>>());
                    cards
                        .into_iter()
                        .map(|statement| view! { <StatementCard statement=statement on_manage=on_manage/> })
                        .collect::<Vec<_>>()
                }}
            </div>
            {move || {
                state
                    .with(|s| s.managed.clone())
                    .map(|statement| view! { <VoteControlModal statement=statement busy=busy on_action=on_action/> })
            }}
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod loaders {
    use std::time::Duration;

    use leptos::prelude::*;

    use crate::components::notification_toasts::notify;
    use crate::net::api::{HttpApi, VotingApi};
    use crate::state::notifications::NotificationState;
    use crate::state::voting::{VotingControlState, committees_load_failed, statements_load_failed};
    use crate::util::retry::{Lifetime, browser_sleep, committee_retry, load_with_retry, statement_retry};

    pub(super) fn spawn_committee_load(
        lifetime: Lifetime,
        state: RwSignal<VotingControlState>,
        notifications: RwSignal<NotificationState>,
    ) {
        leptos::task::spawn_local(async move {
            let loaded = load_with_retry(
                &lifetime,
                move || async move { HttpApi.committees().await },
                browser_sleep,
                committee_retry,
                |err| notify(notifications, committees_load_failed(err)),
            )
            .await;
            if let Some(committees) = loaded {
                state.update(|s| s.committees = committees);
            }
        });
    }

    pub(super) fn spawn_statement_load(
        lifetime: Lifetime,
        state: RwSignal<VotingControlState>,
        notifications: RwSignal<NotificationState>,
        initial_delay: Option<Duration>,
    ) {
        let mut claimed = false;
        state.update(|s| claimed = s.claim_statement_reload());
        if !claimed {
            return;
        }
        leptos::task::spawn_local(async move {
            if let Some(delay) = initial_delay {
                browser_sleep(delay).await;
            }
            let loaded = load_with_retry(
                &lifetime,
                move || async move { HttpApi.voting_statements().await },
                browser_sleep,
                statement_retry,
                |err| notify(notifications, statements_load_failed(err)),
            )
            .await;
            if !lifetime.is_alive() {
                return;
            }
            state.update(|s| {
                s.release_statement_reload();
                if let Some(statements) = loaded {
                    s.apply_statements(statements);
                }
            });
        });
    }
}
