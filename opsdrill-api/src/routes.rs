//! HTTP route handlers for the mission API.
//!
//! Thin adapter: handlers deserialize the request, call one store
//! operation, and serialize the payload. The engine's `NotFound` is the
//! only error and maps to 404; gameplay failures arrive as ordinary
//! outcome payloads with `accepted = false`.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tracing::debug;

use opsdrill::core::types::{CommandOutcome, HintOutcome, SessionStart, SessionStatus};
use opsdrill::error::StoreError;
use opsdrill::mission::MissionSummary;

use crate::state::AppState;

const MAX_PLAYER_NAME_LEN: usize = 64;

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/missions", get(list_missions))
        .route("/missions/start", post(start_mission))
        .route("/missions/{session_id}/command", post(submit_command))
        .route("/missions/{session_id}/hint", post(request_hint))
        .route("/missions/{session_id}", get(session_status))
}

#[derive(Serialize)]
pub struct ApiMessage {
    pub detail: String,
}

/// GET /health - liveness probe, unprefixed.
pub async fn health() -> Json<ApiMessage> {
    Json(ApiMessage {
        detail: "ok".to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct StartRequest {
    mission_id: String,
    /// Accepted for wire compatibility; the engine does not store it.
    #[serde(default)]
    player_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommandRequest {
    command: String,
}

/// GET {prefix}/missions - mission summaries in registration order.
async fn list_missions(State(state): State<AppState>) -> Json<Vec<MissionSummary>> {
    Json(state.store.list_missions())
}

/// POST {prefix}/missions/start - allocate a session.
async fn start_mission(
    State(state): State<AppState>,
    Json(payload): Json<StartRequest>,
) -> Result<Json<SessionStart>, StatusCode> {
    if payload
        .player_name
        .as_ref()
        .is_some_and(|name| name.len() > MAX_PLAYER_NAME_LEN)
    {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    state
        .store
        .start_session(&payload.mission_id)
        .map(Json)
        .map_err(not_found)
}

/// POST {prefix}/missions/:session_id/command - judge one submission.
async fn submit_command(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(payload): Json<CommandRequest>,
) -> Result<Json<CommandOutcome>, StatusCode> {
    if payload.command.is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    state
        .store
        .evaluate_command(&session_id, &payload.command)
        .map(Json)
        .map_err(not_found)
}

/// POST {prefix}/missions/:session_id/hint - current step's hint.
async fn request_hint(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<HintOutcome>, StatusCode> {
    state
        .store
        .request_hint(&session_id)
        .map(Json)
        .map_err(not_found)
}

/// GET {prefix}/missions/:session_id - progress snapshot.
async fn session_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionStatus>, StatusCode> {
    state
        .store
        .session_status(&session_id)
        .map(Json)
        .map_err(not_found)
}

fn not_found(err: StoreError) -> StatusCode {
    debug!(%err, "lookup failed");
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    /// player_name is optional on the wire.
    #[test]
    fn start_request_player_name_defaults() {
        let payload: StartRequest =
            serde_json::from_str(r#"{"mission_id": "sandbox-check"}"#).expect("parse");
        assert_eq!(payload.mission_id, "sandbox-check");
        assert_eq!(payload.player_name, None);
    }

    /// Extra fields are tolerated the way the original API tolerated
    /// them; the known ones land where expected.
    #[test]
    fn start_request_accepts_player_name() {
        let payload: StartRequest =
            serde_json::from_str(r#"{"mission_id": "log-chaos", "player_name": "sam"}"#)
                .expect("parse");
        assert_eq!(payload.player_name.as_deref(), Some("sam"));
    }
}
