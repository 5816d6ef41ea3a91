use futures::executor::block_on;

use super::*;
use crate::net::fake_api::{Call, FakeApi};

#[test]
fn successful_login_navigates_with_reported_user() {
    let user = SessionUser { nome: "Ana".to_owned(), funcoes: vec!["RELATORA".to_owned()], ..SessionUser::default() };
    let api = FakeApi { login: Ok(Some(user.clone())), ..FakeApi::default() };

    let outcome = block_on(attempt_login(&api, "2020123", "segredo"));

    assert_eq!(outcome, LoginOutcome::Navigate { user });
    assert_eq!(
        api.calls(),
        vec![Call::Login { matricula: "2020123".to_owned(), senha: "segredo".to_owned() }]
    );
}

#[test]
fn successful_login_without_body_remembers_roleless_user() {
    let api = FakeApi::default();
    let LoginOutcome::Navigate { user } = block_on(attempt_login(&api, "1", "2")) else {
        panic!("expected navigation");
    };
    assert_eq!(user, SessionUser::default());

    // The remembered user passes the login gate but no role gate.
    let state = crate::state::auth::AuthState::resolved(Some(user));
    assert!(!crate::util::auth::should_redirect_unauth(&state));
    assert!(!crate::util::auth::page_visible(&state, crate::util::auth::VOTE_CONTROL_ROLES));
    assert!(!crate::util::auth::page_visible(&state, crate::util::auth::ACT_ROLES));
}

#[test]
fn rejected_credentials_alert_generic_message() {
    let api = FakeApi {
        login: Err(ApiError::Status { status: 401, message: Some("Senha incorreta".to_owned()) }),
        ..FakeApi::default()
    };
    assert_eq!(block_on(attempt_login(&api, "1", "2")), LoginOutcome::Alert(GENERIC_ERROR_MESSAGE));
}

#[test]
fn network_failure_alerts_generic_message() {
    let api = FakeApi { login: Err(ApiError::Network("offline".to_owned())), ..FakeApi::default() };
    assert_eq!(block_on(attempt_login(&api, "1", "2")), LoginOutcome::Alert(GENERIC_ERROR_MESSAGE));
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn post_login_route_is_vote_display() {
    assert_eq!(POST_LOGIN_ROUTE, "/votacao");
}
