use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotificationState::default();
    let first = state.push(Notification::info("a"));
    let second = state.push(Notification::info("b"));
    assert!(second > first);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].id, second);
}

#[test]
fn dismiss_removes_only_matching_id() {
    let mut state = NotificationState::default();
    let keep = state.push(Notification::info("keep"));
    let drop = state.push(Notification::error("t", "drop"));
    state.dismiss(drop);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, keep);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NotificationState::default();
    state.push(Notification::info("x"));
    state.dismiss(99);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn error_notification_has_title_and_kind() {
    let n = Notification::error("Título", "texto");
    assert_eq!(n.title.as_deref(), Some("Título"));
    assert_eq!(n.kind, NotificationKind::Error);
}
