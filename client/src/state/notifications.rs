//! Toast notification stack shared by every page.
//!
//! DESIGN
//! ======
//! Pages push notifications instead of rendering their own error banners so
//! the retry loops and action handlers stay free of view concerns.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// How long a toast stays visible before it is dismissed automatically.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Visual flavor of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Error,
}

/// A single toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub title: Option<String>,
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    /// Success/info toast with text only.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self { id: 0, title: None, text: text.into(), kind: NotificationKind::Info }
    }

    /// Error toast with a title and the error text.
    #[must_use]
    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: 0, title: Some(title.into()), text: text.into(), kind: NotificationKind::Error }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Append a notification, assigning it a fresh id. Returns the id.
    pub fn push(&mut self, mut notification: Notification) -> u64 {
        self.next_id += 1;
        notification.id = self.next_id;
        self.items.push(notification);
        self.next_id
    }

    /// Remove a notification by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
