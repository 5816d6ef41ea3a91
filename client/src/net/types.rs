//! Wire DTOs for the committee voting REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the upstream JSON exactly (`committee_id`, `nome`,
//! `votacao_inicio`, ...) so serde derives stay trivial. Everything here is a
//! read-only snapshot: pages re-fetch instead of mutating these values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A committee (comissão) as returned by `GET /api/comite`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Committee {
    /// Numeric committee identifier.
    pub committee_id: i64,
    /// Display name.
    pub committee_name: String,
}

/// Role a member holds inside a committee.
///
/// Unknown role strings are kept verbatim in `Other` so a role added on the
/// server never breaks deserialization of the whole member list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemberRole {
    Presidente,
    Presidenta,
    Relator,
    Relatora,
    Especialista,
    Jurista,
    Membro,
    Other(String),
}

impl MemberRole {
    /// Wire representation of the role (e.g. `"RELATORA"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Presidente => "PRESIDENTE",
            Self::Presidenta => "PRESIDENTA",
            Self::Relator => "RELATOR",
            Self::Relatora => "RELATORA",
            Self::Especialista => "ESPECIALISTA",
            Self::Jurista => "JURISTA",
            Self::Membro => "MEMBRO",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_president(&self) -> bool {
        matches!(self, Self::Presidente | Self::Presidenta)
    }

    #[must_use]
    pub fn is_relator(&self) -> bool {
        matches!(self, Self::Relator | Self::Relatora)
    }
}

impl From<String> for MemberRole {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PRESIDENTE" => Self::Presidente,
            "PRESIDENTA" => Self::Presidenta,
            "RELATOR" => Self::Relator,
            "RELATORA" => Self::Relatora,
            "ESPECIALISTA" => Self::Especialista,
            "JURISTA" => Self::Jurista,
            "MEMBRO" => Self::Membro,
            _ => Self::Other(raw),
        }
    }
}

impl From<MemberRole> for String {
    fn from(role: MemberRole) -> Self {
        match role {
            MemberRole::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// A committee member as returned by `GET /api/membro`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub nome: String,
    pub funcao: MemberRole,
    /// Committee the member belongs to.
    pub comite: i64,
}

/// A statement (enunciado) with its vote window timestamps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Unique statement identifier.
    pub statement_id: i64,
    /// Sequence code inside the committee.
    pub codigo: i64,
    /// Full statement text shown to voters.
    pub statement_text: String,
    /// Committee the statement belongs to.
    pub committee_id: i64,
    /// ISO 8601 timestamp when voting started; `None` if not started.
    #[serde(default)]
    pub votacao_inicio: Option<String>,
    /// ISO 8601 timestamp when voting ended; `None` if not finished.
    #[serde(default)]
    pub votacao_fim: Option<String>,
}

impl Statement {
    /// A statement is active while its vote has started and not yet finished.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.votacao_inicio.is_some() && self.votacao_fim.is_none()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.votacao_fim.is_some()
    }

    /// Display code, e.g. `"3.12"` for statement 12 of committee 3.
    #[must_use]
    pub fn display_code(&self) -> String {
        format_statement_code(self.committee_id, self.codigo)
    }
}

/// Format a statement code as `"{committee}.{code}"`.
#[must_use]
pub fn format_statement_code(committee_id: i64, codigo: i64) -> String {
    format!("{committee_id}.{codigo}")
}

/// Server-side vote phase (`EstadoVotacao`).
///
/// "Stopped" is not a phase: it is reached through `DELETE /api/votacao`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VotePhase {
    /// Statement is being presented to the plenary.
    ApresentacaoEnunciado,
    /// Defense timer is running.
    CronometroDefesa,
    /// Ballots are open.
    Votacao,
}

impl VotePhase {
    /// Human-readable phase label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ApresentacaoEnunciado => "Apresentação do enunciado",
            Self::CronometroDefesa => "Cronômetro de defesa",
            Self::Votacao => "Votação",
        }
    }
}

/// Body of `PATCH /api/votacao`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChangeRequest {
    /// Statement whose vote phase changes.
    pub enunciado: i64,
    #[serde(rename = "estadoVotacao")]
    pub estado_votacao: VotePhase,
}

/// One committee entry of the `GET /api/votacao` snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeVote {
    pub committee_id: i64,
    #[serde(default)]
    pub committee_name: String,
    /// Statement currently under vote in this committee, if any.
    #[serde(default)]
    pub enunciado: Option<VotingStatement>,
    #[serde(default)]
    pub votos: VoteTally,
}

/// Statement summary embedded in a vote snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingStatement {
    pub statement_id: i64,
    pub codigo: i64,
    pub statement_text: String,
    #[serde(default, rename = "estadoVotacao")]
    pub estado_votacao: Option<VotePhase>,
}

/// Ballot counts for the current statement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    #[serde(default)]
    pub favor: u32,
    #[serde(default)]
    pub contra: u32,
    #[serde(default)]
    pub abstencao: u32,
}

impl VoteTally {
    /// Sum of all ballots, saturating at `u32::MAX`.
    #[must_use]
    pub fn total(self) -> u32 {
        self.favor.saturating_add(self.contra).saturating_add(self.abstencao)
    }
}

/// An admitted enrollment from `GET /api/caderno`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(default)]
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub matricula: Option<String>,
}

/// Feature permissions attached to a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// May browse statistics across every committee.
    #[serde(default)]
    pub estatistica: bool,
}

/// The logged-in user as reported by `POST /api/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub nome: String,
    /// Role names held by the session (e.g. `"RELATOR"`, `"ASSESSORIA"`).
    #[serde(default)]
    pub funcoes: Vec<String>,
    #[serde(default)]
    pub permissoes: Permissions,
}
