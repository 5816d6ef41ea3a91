use futures::executor::block_on;

use super::*;
use crate::net::fake_api::{Call, FakeApi};
use crate::state::notifications::NotificationKind;

fn statement(id: i64, committee_id: i64, inicio: Option<&str>, fim: Option<&str>) -> Statement {
    Statement {
        statement_id: id,
        codigo: id,
        statement_text: format!("Enunciado {id}"),
        committee_id,
        votacao_inicio: inicio.map(str::to_owned),
        votacao_fim: fim.map(str::to_owned),
    }
}

fn api_with(mutation: Result<(), ApiError>) -> FakeApi {
    FakeApi { mutation, statements: Ok(vec![statement(1, 1, Some("t0"), None)]), ..FakeApi::default() }
}

fn failure() -> ApiError {
    ApiError::Status { status: 409, message: Some("Fase inválida".to_owned()) }
}

// =============================================================
// Active statement
// =============================================================

#[test]
fn active_statement_picks_started_unfinished() {
    let list = vec![
        statement(1, 1, None, None),
        statement(2, 1, Some("t0"), Some("t1")),
        statement(3, 1, Some("t0"), None),
    ];
    assert_eq!(active_statement(&list).map(|s| s.statement_id), Some(3));
}

#[test]
fn active_statement_none_when_no_match() {
    let list = vec![statement(1, 1, None, None), statement(2, 1, Some("t0"), Some("t1"))];
    assert!(active_statement(&list).is_none());
    assert!(active_statement(&[]).is_none());
}

#[test]
fn active_statement_takes_first_of_several() {
    let list = vec![statement(4, 1, Some("a"), None), statement(5, 2, Some("b"), None)];
    assert_eq!(active_statement(&list).map(|s| s.statement_id), Some(4));
}

#[test]
fn apply_statements_updates_managed() {
    let mut state = VotingControlState { managed: Some(statement(9, 1, None, None)), ..Default::default() };
    state.apply_statements(vec![statement(1, 1, None, None)]);
    assert!(state.managed.is_none());

    state.apply_statements(vec![statement(2, 1, Some("t"), None)]);
    assert_eq!(state.managed.as_ref().map(|s| s.statement_id), Some(2));
    assert_eq!(state.statements.len(), 1);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_parses_select_values() {
    assert_eq!(CommitteeFilter::from_select_value("3"), CommitteeFilter::Committee(3));
    assert_eq!(CommitteeFilter::from_select_value(ALL_COMMITTEES), CommitteeFilter::All);
    assert_eq!(CommitteeFilter::from_select_value(""), CommitteeFilter::All);
    assert_eq!(CommitteeFilter::Committee(3).select_value(), "3");
    assert_eq!(CommitteeFilter::All.select_value(), ALL_COMMITTEES);
}

#[test]
fn committee_filter_narrows_and_all_restores() {
    let list = vec![
        statement(1, 1, None, None),
        statement(2, 2, None, None),
        statement(3, 2, Some("t"), None),
    ];
    let narrowed: Vec<i64> = visible_statements(&list, CommitteeFilter::Committee(2))
        .iter()
        .map(|s| s.statement_id)
        .collect();
    assert_eq!(narrowed, vec![2, 3]);

    let all: Vec<i64> = visible_statements(&list, CommitteeFilter::All)
        .iter()
        .map(|s| s.statement_id)
        .collect();
    assert_eq!(all, vec![1, 2, 3]);
}

#[test]
fn visible_statements_hide_finished() {
    let list = vec![statement(1, 1, Some("a"), Some("b")), statement(2, 1, None, None)];
    let ids: Vec<i64> = visible_statements(&list, CommitteeFilter::All)
        .iter()
        .map(|s| s.statement_id)
        .collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn committee_options_are_numbered_after_all() {
    let committees = vec![
        Committee { committee_id: 7, committee_name: "Civil".to_owned() },
        Committee { committee_id: 9, committee_name: "Penal".to_owned() },
    ];
    assert_eq!(
        committee_options(&committees),
        vec![
            ("TODOS".to_owned(), "TODOS".to_owned()),
            ("7".to_owned(), "1. Civil".to_owned()),
            ("9".to_owned(), "2. Penal".to_owned()),
        ]
    );
}

// =============================================================
// Actions
// =============================================================

#[test]
fn phase_actions_map_to_vote_phases() {
    assert_eq!(ControlAction::Present.phase(), Some(VotePhase::ApresentacaoEnunciado));
    assert_eq!(ControlAction::StartTimer.phase(), Some(VotePhase::CronometroDefesa));
    assert_eq!(ControlAction::StartVoting.phase(), Some(VotePhase::Votacao));
    assert_eq!(ControlAction::Stop.phase(), None);
}

#[test]
fn every_action_reloads_once_and_notifies_on_success() {
    let managed = statement(1, 1, Some("t0"), None);
    for action in ControlAction::ALL {
        let api = api_with(Ok(()));
        let report = block_on(perform_action(&api, action, Some(&managed)));
        assert_eq!(api.count(&Call::Statements), 1, "{action:?}");
        assert_eq!(report.notification.kind, NotificationKind::Info);
        assert!(report.statements.is_ok());
    }
}

#[test]
fn every_action_reloads_once_and_notifies_on_failure() {
    let managed = statement(1, 1, Some("t0"), None);
    for action in ControlAction::ALL {
        let api = api_with(Err(failure()));
        let report = block_on(perform_action(&api, action, Some(&managed)));
        assert_eq!(api.count(&Call::Statements), 1, "{action:?}");
        assert_eq!(report.notification.kind, NotificationKind::Error);
        assert_eq!(report.notification.title.as_deref(), Some(ACTION_FAILED));
        assert_eq!(report.notification.text, "Fase inválida");
    }
}

#[test]
fn phase_action_sends_managed_statement_and_phase() {
    let api = api_with(Ok(()));
    let managed = statement(42, 1, Some("t0"), None);
    let report = block_on(perform_action(&api, ControlAction::StartVoting, Some(&managed)));

    assert_eq!(report.notification.text, PHASE_CHANGED);
    assert_eq!(
        api.calls(),
        vec![
            Call::Phase(PhaseChangeRequest { enunciado: 42, estado_votacao: VotePhase::Votacao }),
            Call::Statements,
        ]
    );
}

#[test]
fn stop_action_deletes_then_reloads() {
    let api = api_with(Ok(()));
    let report = block_on(perform_action(&api, ControlAction::Stop, None));
    assert_eq!(report.notification.text, VOTE_STOPPED);
    assert_eq!(api.calls(), vec![Call::Stop, Call::Statements]);
}

#[test]
fn phase_action_without_managed_statement_still_reloads() {
    let api = api_with(Ok(()));
    let report = block_on(perform_action(&api, ControlAction::Present, None));
    assert_eq!(report.notification.text, NO_MANAGED_STATEMENT);
    assert_eq!(api.calls(), vec![Call::Statements]);
}

#[test]
fn failed_reload_is_reported_alongside_notification() {
    let mut api = api_with(Ok(()));
    api.statements = Err(ApiError::Network("offline".to_owned()));
    let report = block_on(perform_action(&api, ControlAction::Stop, None));
    assert_eq!(report.notification.kind, NotificationKind::Info);
    assert!(report.statements.is_err());
}

#[test]
fn load_failure_notifications_carry_server_text() {
    let err = failure();
    assert_eq!(statements_load_failed(&err).title.as_deref(), Some(STATEMENTS_LOAD_FAILED));
    assert_eq!(committees_load_failed(&err).text, "Fase inválida");
}

// =============================================================
// Retrying statement load
// =============================================================

#[test]
fn only_one_statement_reload_can_be_claimed() {
    let mut state = VotingControlState::default();
    assert!(state.claim_statement_reload());
    assert!(!state.claim_statement_reload());
    assert!(!state.claim_statement_reload());

    state.release_statement_reload();
    assert!(state.claim_statement_reload());
}

#[test]
fn applying_statements_keeps_pending_reload() {
    let mut state = VotingControlState::default();
    assert!(state.claim_statement_reload());
    state.apply_statements(vec![statement(1, 1, Some("t0"), None)]);
    assert!(state.reload_pending);
}
