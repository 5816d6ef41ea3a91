//! REST API calls against the committee voting backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an [`ApiError`]. Pages never inspect variants directly;
//! they call [`ApiError::display_message`], which yields the server-provided
//! message when one exists and a generic fallback otherwise.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::types::{Committee, CommitteeVote, Enrollment, Member, PhaseChangeRequest, SessionUser, Statement};

pub const COMMITTEES_ENDPOINT: &str = "/api/comite";
pub const MEMBERS_ENDPOINT: &str = "/api/membro";
pub const VOTING_STATEMENTS_ENDPOINT: &str = "/api/enunciado/votacao";
pub const VOTE_ENDPOINT: &str = "/api/votacao";
pub const LOGIN_ENDPOINT: &str = "/api/login";

/// Caderno admission level for admitted enrollments.
pub const ADMITTED_LEVEL: u8 = 0;

/// Shown when a failure carries no usable server message.
pub const GENERIC_ERROR_MESSAGE: &str = "Erro ao se comunicar com servidor.";

/// Exact message the server returns for voting requests before the scheduled date.
pub const VOTING_NOT_OPEN_MESSAGE: &str = "Aguarde até a data da votação.";

/// Errors produced by REST calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message extracted from the server response, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } => Some(message),
            _ => None,
        }
    }

    /// Text suitable for a user-facing notification.
    #[must_use]
    pub fn display_message(&self) -> String {
        self.server_message()
            .unwrap_or(GENERIC_ERROR_MESSAGE)
            .to_owned()
    }

    /// True when the server refused because the voting window has not opened yet.
    #[must_use]
    pub fn is_voting_not_open(&self) -> bool {
        self.server_message() == Some(VOTING_NOT_OPEN_MESSAGE)
    }
}

/// Longest plain-text error body shown to the user.
pub const MAX_PLAIN_MESSAGE_CHARS: usize = 200;

/// Extract a human-readable message from an error response body.
///
/// JSON bodies are searched for `mensagem`, `message`, `erro` and `error`
/// string fields (or are a bare JSON string). Non-JSON bodies are used only
/// when served as `text/plain` and no longer than
/// [`MAX_PLAIN_MESSAGE_CHARS`]; HTML error pages never reach a toast.
#[must_use]
pub fn extract_error_message(body: &str, content_type: Option<&str>) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(text)) => Some(text).filter(|t| !t.trim().is_empty()),
        Ok(serde_json::Value::Object(map)) => ["mensagem", "message", "erro", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .filter(|t| !t.trim().is_empty())
            .map(str::to_owned),
        Ok(_) => None,
        Err(_) => {
            let plain = content_type.is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("text/plain"));
            (plain && trimmed.chars().count() <= MAX_PLAIN_MESSAGE_CHARS).then(|| trimmed.to_owned())
        }
    }
}

/// Build the `Authorization` header value for `POST /api/login`.
#[must_use]
pub fn basic_auth_header(matricula: &str, senha: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{matricula}:{senha}")))
}

#[must_use]
pub fn enrollments_endpoint(level: u8, committee_id: i64) -> String {
    format!("/api/caderno?nivel={level}&comissao={committee_id}")
}

/// Operations the pages need from the backend.
///
/// `HttpApi` is the browser implementation; tests drive page logic through
/// in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait VotingApi {
    /// `GET /api/comite`.
    async fn committees(&self) -> Result<Vec<Committee>, ApiError>;
    /// `GET /api/membro`.
    async fn members(&self) -> Result<Vec<Member>, ApiError>;
    /// `GET /api/caderno?nivel=&comissao=`.
    async fn enrollments(&self, level: u8, committee_id: i64) -> Result<Vec<Enrollment>, ApiError>;
    /// `GET /api/enunciado/votacao`.
    async fn voting_statements(&self) -> Result<Vec<Statement>, ApiError>;
    /// `GET /api/votacao`.
    async fn vote_snapshot(&self) -> Result<Vec<CommitteeVote>, ApiError>;
    /// `PATCH /api/votacao`.
    async fn set_vote_phase(&self, request: PhaseChangeRequest) -> Result<(), ApiError>;
    /// `DELETE /api/votacao`.
    async fn stop_vote(&self) -> Result<(), ApiError>;
    /// `POST /api/login`; returns the session user when the body carries one.
    async fn login(&self, matricula: &str, senha: &str) -> Result<Option<SessionUser>, ApiError>;
}

/// Same-origin HTTP implementation backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl VotingApi for HttpApi {
    async fn committees(&self) -> Result<Vec<Committee>, ApiError> {
        get_json(COMMITTEES_ENDPOINT).await
    }

    async fn members(&self) -> Result<Vec<Member>, ApiError> {
        get_json(MEMBERS_ENDPOINT).await
    }

    async fn enrollments(&self, level: u8, committee_id: i64) -> Result<Vec<Enrollment>, ApiError> {
        get_json(&enrollments_endpoint(level, committee_id)).await
    }

    async fn voting_statements(&self) -> Result<Vec<Statement>, ApiError> {
        get_json(VOTING_STATEMENTS_ENDPOINT).await
    }

    async fn vote_snapshot(&self) -> Result<Vec<CommitteeVote>, ApiError> {
        get_json(VOTE_ENDPOINT).await
    }

    async fn set_vote_phase(&self, request: PhaseChangeRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::patch(VOTE_ENDPOINT)
                .json(&request)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            ensure_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn stop_vote(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(VOTE_ENDPOINT)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            ensure_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, matricula: &str, senha: &str) -> Result<Option<SessionUser>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
                .header("Authorization", &basic_auth_header(matricula, senha))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = ensure_ok(resp).await?;
            let body = resp.text().await.unwrap_or_default();
            Ok(serde_json::from_str::<SessionUser>(&body).ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (matricula, senha);
            Err(ApiError::Unavailable)
        }
    }
}

async fn get_json<T>(url: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = ensure_ok(resp).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let content_type = resp.headers().get("content-type");
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, message: extract_error_message(&body, content_type.as_deref()) })
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
