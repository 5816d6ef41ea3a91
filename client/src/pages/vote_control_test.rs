use super::*;
use crate::net::api::{ApiError, VOTING_NOT_OPEN_MESSAGE};
use crate::state::notifications::NotificationKind;
use crate::state::voting::{PHASE_CHANGED, STATEMENTS_LOAD_FAILED};
use crate::util::retry::RETRY_DELAY;

fn statement(id: i64) -> Statement {
    Statement {
        statement_id: id,
        codigo: id,
        statement_text: format!("Enunciado {id}"),
        committee_id: 1,
        votacao_inicio: None,
        votacao_fim: None,
    }
}

#[test]
fn successful_reload_applies_statements_without_retry() {
    let report = ActionReport { notification: Notification::info(PHASE_CHANGED), statements: Ok(vec![statement(1)]) };

    let effects = follow_up(report);

    assert_eq!(effects.notifications, vec![Notification::info(PHASE_CHANGED)]);
    assert_eq!(effects.statements, Some(vec![statement(1)]));
    assert_eq!(effects.retry_after, None);
}

#[test]
fn failed_reload_notifies_and_schedules_retry() {
    let report = ActionReport {
        notification: Notification::info(PHASE_CHANGED),
        statements: Err(ApiError::Network("offline".to_owned())),
    };

    let effects = follow_up(report);

    assert_eq!(effects.notifications.len(), 2);
    assert_eq!(effects.notifications[1].kind, NotificationKind::Error);
    assert_eq!(effects.notifications[1].title.as_deref(), Some(STATEMENTS_LOAD_FAILED));
    assert_eq!(effects.statements, None);
    assert_eq!(effects.retry_after, Some(RETRY_DELAY));
}

#[test]
fn voting_not_open_reload_is_not_retried() {
    let report = ActionReport {
        notification: Notification::info(PHASE_CHANGED),
        statements: Err(ApiError::Status { status: 400, message: Some(VOTING_NOT_OPEN_MESSAGE.to_owned()) }),
    };

    let effects = follow_up(report);

    assert_eq!(effects.notifications[1].text, VOTING_NOT_OPEN_MESSAGE);
    assert_eq!(effects.retry_after, None);
}
