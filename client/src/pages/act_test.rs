use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::fake_api::{Call, FakeApi};
use crate::net::types::{Enrollment, Member, MemberRole};
use crate::state::notifications::NotificationKind;
use crate::state::voting::COMMITTEES_LOAD_FAILED;

fn civil() -> Committee {
    Committee { committee_id: 3, committee_name: "Direito Civil".to_owned() }
}

fn member(id: i64, nome: &str, funcao: MemberRole, comite: i64) -> Member {
    Member { id, nome: nome.to_owned(), funcao, comite }
}

#[test]
fn act_requests_admitted_enrollments_then_members() {
    let api = FakeApi {
        enrollments: Ok(vec![Enrollment { id: 1, nome: "Davi".to_owned(), matricula: Some("77".to_owned()) }]),
        members: Ok(vec![
            member(1, "Ana", MemberRole::Presidenta, 3),
            member(2, "Outro", MemberRole::Presidente, 9),
        ]),
        ..FakeApi::default()
    };

    let document = block_on(build_act(&api, &civil())).unwrap();

    assert_eq!(api.calls(), vec![Call::Enrollments { level: 0, committee_id: 3 }, Call::Members]);
    let text = document.to_string();
    assert!(text.contains("Direito Civil"));
    assert!(text.contains("Ana"));
    assert!(text.contains("Davi"));
    assert!(!text.contains("Outro"));
}

#[test]
fn enrollment_failure_skips_members() {
    let api = FakeApi {
        enrollments: Err(ApiError::Status { status: 500, message: Some("caderno indisponível".to_owned()) }),
        ..FakeApi::default()
    };

    let notification = block_on(build_act(&api, &civil())).unwrap_err();

    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.title.as_deref(), Some(ACT_FAILED));
    assert_eq!(notification.text, "caderno indisponível");
    assert_eq!(api.count(&Call::Members), 0);
}

#[test]
fn member_failure_notifies_once() {
    let api = FakeApi { members: Err(ApiError::Network("offline".to_owned())), ..FakeApi::default() };
    let notification = block_on(build_act(&api, &civil())).unwrap_err();
    assert_eq!(notification.text, crate::net::api::GENERIC_ERROR_MESSAGE);
    assert_eq!(api.calls().len(), 2);
}

#[test]
fn committee_list_failure_is_notified() {
    let api = FakeApi { committees: Err(ApiError::Network("offline".to_owned())), ..FakeApi::default() };
    let notification = block_on(load_act_committees(&api)).unwrap_err();
    assert_eq!(notification.title.as_deref(), Some(COMMITTEES_LOAD_FAILED));
}
