//! In-memory `VotingApi` used by page and state tests.

use std::cell::RefCell;

use super::api::{ApiError, VotingApi};
use super::types::{Committee, CommitteeVote, Enrollment, Member, PhaseChangeRequest, SessionUser, Statement};

/// A recorded call against the fake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Committees,
    Members,
    Enrollments { level: u8, committee_id: i64 },
    Statements,
    Snapshot,
    Phase(PhaseChangeRequest),
    Stop,
    Login { matricula: String, senha: String },
}

/// Canned responses per endpoint plus a call log.
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub committees: Result<Vec<Committee>, ApiError>,
    pub members: Result<Vec<Member>, ApiError>,
    pub enrollments: Result<Vec<Enrollment>, ApiError>,
    pub statements: Result<Vec<Statement>, ApiError>,
    pub snapshot: Result<Vec<CommitteeVote>, ApiError>,
    /// Result of both `set_vote_phase` and `stop_vote`.
    pub mutation: Result<(), ApiError>,
    pub login: Result<Option<SessionUser>, ApiError>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            committees: Ok(Vec::new()),
            members: Ok(Vec::new()),
            enrollments: Ok(Vec::new()),
            statements: Ok(Vec::new()),
            snapshot: Ok(Vec::new()),
            mutation: Ok(()),
            login: Ok(None),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl VotingApi for FakeApi {
    async fn committees(&self) -> Result<Vec<Committee>, ApiError> {
        self.record(Call::Committees);
        self.committees.clone()
    }

    async fn members(&self) -> Result<Vec<Member>, ApiError> {
        self.record(Call::Members);
        self.members.clone()
    }

    async fn enrollments(&self, level: u8, committee_id: i64) -> Result<Vec<Enrollment>, ApiError> {
        self.record(Call::Enrollments { level, committee_id });
        self.enrollments.clone()
    }

    async fn voting_statements(&self) -> Result<Vec<Statement>, ApiError> {
        self.record(Call::Statements);
        self.statements.clone()
    }

    async fn vote_snapshot(&self) -> Result<Vec<CommitteeVote>, ApiError> {
        self.record(Call::Snapshot);
        self.snapshot.clone()
    }

    async fn set_vote_phase(&self, request: PhaseChangeRequest) -> Result<(), ApiError> {
        self.record(Call::Phase(request));
        self.mutation.clone()
    }

    async fn stop_vote(&self) -> Result<(), ApiError> {
        self.record(Call::Stop);
        self.mutation.clone()
    }

    async fn login(&self, matricula: &str, senha: &str) -> Result<Option<SessionUser>, ApiError> {
        self.record(Call::Login { matricula: matricula.to_owned(), senha: senha.to_owned() });
        self.login.clone()
    }
}
