//! Chat endpoints.
//!
//! Three endpoints:
//! - `POST /api/chat/send` — run one exchange (classify → canned reply)
//! - `GET /api/chat/sessions/:id` — full ordered transcript
//! - `GET /api/chat/topics` — the topics the assistant can address

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::assistant::{exchange, Topic, Turn};
use crate::config;

const DISCLAIMER: &str =
    "Ask me anything related to Sickle Cell Disease, symptoms, or care! Always confirm with \
     your healthcare team.";

#[derive(Deserialize)]
pub struct ChatSendRequest {
    pub session_id: Option<Uuid>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatSendResponse {
    pub session_id: Uuid,
    pub topic: &'static str,
    pub reply: &'static str,
    pub disclaimer: &'static str,
}

/// `POST /api/chat/send` — send a chat message.
///
/// Creates a session when `session_id` is absent; the reply is selected by
/// the first matching keyword trigger and both turns are appended to the
/// session log before returning.
pub async fn send(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatSendRequest>,
) -> Result<Json<ChatSendResponse>, ApiError> {
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".into()));
    }
    if req.message.chars().count() > config::MAX_MESSAGE_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Message too long (max {} chars)",
            config::MAX_MESSAGE_CHARS
        )));
    }

    let mut sessions = ctx.sessions()?;

    let session_id = match req.session_id {
        Some(id) if sessions.get(id).is_some() => id,
        Some(_) => return Err(ApiError::NotFound("Session not found".into())),
        None => sessions.create(),
    };

    let log = sessions
        .get_mut(session_id)
        .ok_or_else(|| ApiError::Internal("session vanished between lookup and use".into()))?;

    let outcome = exchange(log, &req.message)
        .ok_or_else(|| ApiError::BadRequest("Message cannot be empty".into()))?;

    tracing::debug!(
        %session_id,
        topic = outcome.topic.as_str(),
        "chat exchange completed"
    );

    Ok(Json(ChatSendResponse {
        session_id,
        topic: outcome.topic.as_str(),
        reply: outcome.reply,
        disclaimer: DISCLAIMER,
    }))
}

#[derive(Serialize)]
pub struct TranscriptLine {
    #[serde(flatten)]
    pub turn: Turn,
    /// Display form, prefixed by speaker ("You:" / "Bot:").
    pub display: String,
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub session_id: Uuid,
    pub turns: Vec<TranscriptLine>,
}

/// `GET /api/chat/sessions/:id` — full ordered transcript for one session.
pub async fn transcript(
    State(ctx): State<ApiContext>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let sessions = ctx.sessions()?;
    let log = sessions
        .get(session_id)
        .ok_or_else(|| ApiError::NotFound("Session not found".into()))?;

    let turns = log
        .turns()
        .iter()
        .map(|turn| TranscriptLine {
            display: format!("{} {}", turn.role.prefix(), turn.content),
            turn: turn.clone(),
        })
        .collect();

    Ok(Json(TranscriptResponse { session_id, turns }))
}

#[derive(Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<&'static str>,
}

/// `GET /api/chat/topics` — topic labels for the frontend's hint list.
pub async fn topics() -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: Topic::all_addressable()
            .iter()
            .map(|t| t.as_str())
            .collect(),
    })
}
