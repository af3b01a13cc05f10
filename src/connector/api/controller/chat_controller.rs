use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::AppState;
use crate::application::ChatOutcome;
use crate::connector::api::{ApiError, ChatRequest, ChatResponse};

type ChatReply = (StatusCode, Json<ChatResponse>);

/// `POST /api/v1/chat`
///
/// - `200 {"response": text}` when the model answered
/// - `204 {"response": "No data"}` when there is nothing to return
/// - `400 {"error": ...}` for a non-object body or a missing, non-string, or
///   empty `input_text`
/// - `500 {"error": ...}` for any upstream failure
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<ChatReply, ApiError> {
    let request_id = Uuid::new_v4();
    handle_chat(state, payload)
        .instrument(info_span!("chat", %request_id))
        .await
}

async fn handle_chat(
    state: AppState,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<ChatReply, ApiError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Unreadable chat payload: {}", rejection.body_text());
            return Err(ApiError::invalid_payload());
        }
    };

    let request = match ChatRequest::from_object(body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Malformed chat payload: {}", e);
            return Err(ApiError::invalid_payload());
        }
    };

    let Some(input) = request.input() else {
        warn!("Chat payload without input_text");
        return Err(ApiError::invalid_payload());
    };

    match state.chat.execute(input).await? {
        ChatOutcome::Answered(completion) => {
            info!("Answered chat request");
            Ok((StatusCode::OK, Json(ChatResponse::new(completion.into_text()))))
        }
        ChatOutcome::NoData => {
            info!("No data for chat request");
            Ok((StatusCode::NO_CONTENT, Json(ChatResponse::no_data())))
        }
    }
}

/// `OPTIONS /api/v1/chat` without CORS preflight headers. Real preflights are
/// answered by the CORS layer before reaching this handler.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
