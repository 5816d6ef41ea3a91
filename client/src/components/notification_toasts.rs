//! Toast stack rendered once at the application root.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationKind, NotificationState};

/// Push `notification` and schedule its automatic dismissal.
pub fn notify(notifications: RwSignal<NotificationState>, notification: Notification) {
    let mut id = 0;
    notifications.update(|s| id = s.push(notification));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::notifications::AUTO_DISMISS_MS).await;
        notifications.update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn NotificationToasts() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="toasts" aria-live="polite">
            {move || {
                notifications
                    .get()
                    .items
                    .into_iter()
                    .map(|n| {
                        let id = n.id;
                        let error = n.kind == NotificationKind::Error;
                        view! {
                            <div class="toast" class:toast--error=error role="status">
                                <div class="toast__header">
                                    <strong class="toast__title">{n.title.unwrap_or_default()}</strong>
                                    <button
                                        class="toast__close"
                                        aria-label="Fechar"
                                        on:click=move |_| notifications.update(|s| s.dismiss(id))
                                    >
                                        "×"
                                    </button>
                                </div>
                                <div class="toast__body">{n.text}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
