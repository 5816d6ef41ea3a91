//! Committee roster derivation for the members page and roster PDF.

#[cfg(test)]
#[path = "members_test.rs"]
mod members_test;

use crate::net::types::{Member, MemberRole};

/// Members of one committee grouped by role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitteeRoster {
    pub president: Option<Member>,
    pub relators: Vec<Member>,
    pub specialists: Vec<Member>,
    pub jurists: Vec<Member>,
    /// Rank-and-file members (`MEMBRO`).
    pub members: Vec<Member>,
}

impl CommitteeRoster {
    /// Group the members belonging to `committee_id`.
    ///
    /// The president is the first PRESIDENTE/PRESIDENTA found. Members with
    /// roles outside the known set are left out of every group.
    #[must_use]
    pub fn for_committee(all: &[Member], committee_id: i64) -> Self {
        let mut roster = Self::default();
        for member in all.iter().filter(|m| m.comite == committee_id) {
            match member.funcao {
                MemberRole::Presidente | MemberRole::Presidenta => {
                    if roster.president.is_none() {
                        roster.president = Some(member.clone());
                    }
                }
                MemberRole::Relator | MemberRole::Relatora => roster.relators.push(member.clone()),
                MemberRole::Especialista => roster.specialists.push(member.clone()),
                MemberRole::Jurista => roster.jurists.push(member.clone()),
                MemberRole::Membro => roster.members.push(member.clone()),
                MemberRole::Other(_) => {}
            }
        }
        roster
    }

    #[must_use]
    pub fn president_label(&self) -> String {
        self.president
            .as_ref()
            .map(|p| p.funcao.as_str().to_lowercase())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn relators_label(&self) -> String {
        relators_label(&self.relators)
    }

    #[must_use]
    pub fn specialists_label(&self) -> &'static str {
        if self.specialists.len() == 1 { "Especialista" } else { "Especialistas" }
    }

    #[must_use]
    pub fn jurists_label(&self) -> &'static str {
        if self.jurists.len() == 1 { "Jurista" } else { "Juristas" }
    }

    #[must_use]
    pub fn members_heading(&self) -> String {
        format!("{} membros", self.members.len())
    }
}

/// Label for a group of relators.
///
/// A single relator is labeled with their own role lower-cased; a group is
/// "Relatoras" only when every relator is a RELATORA.
#[must_use]
pub fn relators_label(relators: &[Member]) -> String {
    if let [only] = relators {
        return only.funcao.as_str().to_lowercase();
    }
    if relators.iter().all(|r| r.funcao == MemberRole::Relatora) {
        "Relatoras".to_owned()
    } else {
        "Relatores".to_owned()
    }
}
