use super::*;

fn member(id: i64, role: &str, comite: i64) -> Member {
    Member { id, nome: format!("Pessoa {id}"), funcao: MemberRole::from(role.to_owned()), comite }
}

// =============================================================
// relators_label
// =============================================================

#[test]
fn single_relator_uses_lowercased_role() {
    assert_eq!(relators_label(&[member(1, "RELATOR", 1)]), "relator");
    assert_eq!(relators_label(&[member(1, "RELATORA", 1)]), "relatora");
}

#[test]
fn all_feminine_relators_are_relatoras() {
    let relators = [member(1, "RELATORA", 1), member(2, "RELATORA", 1)];
    assert_eq!(relators_label(&relators), "Relatoras");
}

#[test]
fn mixed_relators_are_relatores() {
    let relators = [member(1, "RELATORA", 1), member(2, "RELATOR", 1)];
    assert_eq!(relators_label(&relators), "Relatores");
}

#[test]
fn masculine_relators_are_relatores() {
    let relators = [member(1, "RELATOR", 1), member(2, "RELATOR", 1)];
    assert_eq!(relators_label(&relators), "Relatores");
}

// =============================================================
// CommitteeRoster
// =============================================================

#[test]
fn roster_filters_by_committee_and_groups_roles() {
    let all = vec![
        member(1, "PRESIDENTA", 1),
        member(2, "RELATOR", 1),
        member(3, "ESPECIALISTA", 1),
        member(4, "JURISTA", 1),
        member(5, "MEMBRO", 1),
        member(6, "MEMBRO", 1),
        member(7, "MEMBRO", 2),
        member(8, "PRESIDENTE", 2),
    ];
    let roster = CommitteeRoster::for_committee(&all, 1);

    assert_eq!(roster.president.as_ref().map(|p| p.id), Some(1));
    assert_eq!(roster.president_label(), "presidenta");
    assert_eq!(roster.relators.len(), 1);
    assert_eq!(roster.specialists.len(), 1);
    assert_eq!(roster.jurists.len(), 1);
    assert_eq!(roster.members.iter().map(|m| m.id).collect::<Vec<_>>(), vec![5, 6]);
    assert_eq!(roster.members_heading(), "2 membros");
}

#[test]
fn roster_keeps_first_president() {
    let all = vec![member(1, "PRESIDENTE", 1), member(2, "PRESIDENTA", 1)];
    let roster = CommitteeRoster::for_committee(&all, 1);
    assert_eq!(roster.president.map(|p| p.id), Some(1));
}

#[test]
fn roster_without_president_has_empty_label() {
    let roster = CommitteeRoster::for_committee(&[member(1, "MEMBRO", 1)], 1);
    assert!(roster.president.is_none());
    assert_eq!(roster.president_label(), "");
}

#[test]
fn specialist_and_jurist_labels_pluralize() {
    let one = CommitteeRoster::for_committee(&[member(1, "ESPECIALISTA", 1), member(2, "JURISTA", 1)], 1);
    assert_eq!(one.specialists_label(), "Especialista");
    assert_eq!(one.jurists_label(), "Jurista");

    let none = CommitteeRoster::default();
    assert_eq!(none.specialists_label(), "Especialistas");
    assert_eq!(none.jurists_label(), "Juristas");
}

#[test]
fn unknown_roles_are_not_grouped() {
    let roster = CommitteeRoster::for_committee(&[member(1, "SECRETARIO", 1)], 1);
    assert_eq!(roster, CommitteeRoster::default());
}
