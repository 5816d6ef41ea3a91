//! Voting control state: statement list, committee filter, managed statement.
//!
//! DESIGN
//! ======
//! The server owns the vote state machine. This module only remembers the
//! last fetched snapshot and which statement the control modal shows; every
//! action re-fetches the statement list instead of patching local state.

#[cfg(test)]
#[path = "voting_test.rs"]
mod voting_test;

use crate::net::api::{ApiError, VotingApi};
use crate::net::types::{Committee, PhaseChangeRequest, Statement, VotePhase};
use crate::state::notifications::Notification;

/// Select value meaning "every committee".
pub const ALL_COMMITTEES: &str = "TODOS";

pub const COMMITTEES_LOAD_FAILED: &str = "Não foi possível carregar as comissões.";
pub const STATEMENTS_LOAD_FAILED: &str = "Não foi possível carregar os enunciados.";
pub const ACTION_FAILED: &str = "Não foi possível processar seu pedido.";
pub const PHASE_CHANGED: &str = "Votação alterada com sucesso!";
pub const VOTE_STOPPED: &str = "Votação encerrada com sucesso!";
pub const NO_MANAGED_STATEMENT: &str = "Nenhum enunciado selecionado.";

/// Committee filter of the control page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommitteeFilter {
    #[default]
    All,
    Committee(i64),
}

impl CommitteeFilter {
    /// Parse the `<select>` value; anything that is not a committee id means all.
    #[must_use]
    pub fn from_select_value(raw: &str) -> Self {
        raw.trim().parse::<i64>().map_or(Self::All, Self::Committee)
    }

    #[must_use]
    pub fn select_value(self) -> String {
        match self {
            Self::All => ALL_COMMITTEES.to_owned(),
            Self::Committee(id) => id.to_string(),
        }
    }

    #[must_use]
    pub fn matches(self, statement: &Statement) -> bool {
        match self {
            Self::All => true,
            Self::Committee(id) => statement.committee_id == id,
        }
    }
}

/// One of the four buttons of the control modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    Present,
    StartTimer,
    StartVoting,
    Stop,
}

impl ControlAction {
    pub const ALL: [Self; 4] = [Self::Present, Self::StartTimer, Self::StartVoting, Self::Stop];

    /// Phase requested by this action; `None` for the stop action.
    #[must_use]
    pub fn phase(self) -> Option<VotePhase> {
        match self {
            Self::Present => Some(VotePhase::ApresentacaoEnunciado),
            Self::StartTimer => Some(VotePhase::CronometroDefesa),
            Self::StartVoting => Some(VotePhase::Votacao),
            Self::Stop => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "1. Apresentar enunciado",
            Self::StartTimer => "2. Iniciar cronômetro",
            Self::StartVoting => "3. Iniciar votação",
            Self::Stop => "4. Parar votação",
        }
    }

    fn success_text(self) -> &'static str {
        match self {
            Self::Stop => VOTE_STOPPED,
            _ => PHASE_CHANGED,
        }
    }
}

/// First statement whose vote has started and not finished.
#[must_use]
pub fn active_statement(statements: &[Statement]) -> Option<&Statement> {
    statements.iter().find(|s| s.is_active())
}

/// Unfinished statements that pass `filter`, in server order.
#[must_use]
pub fn visible_statements(statements: &[Statement], filter: CommitteeFilter) -> Vec<&Statement> {
    statements
        .iter()
        .filter(|s| !s.is_finished() && filter.matches(s))
        .collect()
}

/// Options for the committee `<select>`: `(value, label)` pairs.
#[must_use]
pub fn committee_options(committees: &[Committee]) -> Vec<(String, String)> {
    std::iter::once((ALL_COMMITTEES.to_owned(), ALL_COMMITTEES.to_owned()))
        .chain(
            committees
                .iter()
                .enumerate()
                .map(|(i, c)| (c.committee_id.to_string(), format!("{}. {}", i + 1, c.committee_name))),
        )
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct VotingControlState {
    pub committees: Vec<Committee>,
    pub statements: Vec<Statement>,
    pub filter: CommitteeFilter,
    /// Statement shown in the control modal.
    pub managed: Option<Statement>,
    /// A retrying statement load is running.
    pub reload_pending: bool,
}

impl VotingControlState {
    /// Replace the statement snapshot and re-derive the managed statement.
    pub fn apply_statements(&mut self, statements: Vec<Statement>) {
        self.managed = active_statement(&statements).cloned();
        self.statements = statements;
    }

    /// Claim the single retrying statement load. Returns false when one is
    /// already running, in which case no new loader may start.
    pub fn claim_statement_reload(&mut self) -> bool {
        !std::mem::replace(&mut self.reload_pending, true)
    }

    /// Release the claim once the retrying load has finished or given up.
    pub fn release_statement_reload(&mut self) {
        self.reload_pending = false;
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&Statement> {
        visible_statements(&self.statements, self.filter)
    }
}

/// Result of running a control action: the toast to show and the fresh
/// statement list (or why it could not be fetched).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionReport {
    pub notification: Notification,
    pub statements: Result<Vec<Statement>, ApiError>,
}

/// Request the action, then reload the statement list exactly once.
///
/// The reload happens whether the request succeeded or not, so the page always
/// reflects what the server actually holds.
pub async fn perform_action<A: VotingApi>(api: &A, action: ControlAction, managed: Option<&Statement>) -> ActionReport {
    let outcome = match action.phase() {
        None => api.stop_vote().await.map_err(|e| e.display_message()),
        Some(phase) => match managed {
            Some(statement) => api
                .set_vote_phase(PhaseChangeRequest { enunciado: statement.statement_id, estado_votacao: phase })
                .await
                .map_err(|e| e.display_message()),
            None => Err(NO_MANAGED_STATEMENT.to_owned()),
        },
    };

    let statements = api.voting_statements().await;

    let notification = match outcome {
        Ok(()) => Notification::info(action.success_text()),
        Err(text) => Notification::error(ACTION_FAILED, text),
    };
    ActionReport { notification, statements }
}

/// Toast for a failed statement load.
#[must_use]
pub fn statements_load_failed(err: &ApiError) -> Notification {
    Notification::error(STATEMENTS_LOAD_FAILED, err.display_message())
}

/// Toast for a failed committee load.
#[must_use]
pub fn committees_load_failed(err: &ApiError) -> Notification {
    Notification::error(COMMITTEES_LOAD_FAILED, err.display_message())
}
