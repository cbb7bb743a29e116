use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::scratch::ScratchDir;
use crate::server::AppState;
use crate::{youtube, TranscribeError};

#[derive(Debug, Deserialize)]
pub struct TranscribeRequest {
    /// Absent field behaves like an empty URL, not a malformed body.
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeResponse {
    pub success: bool,
    pub transcript: String,
    pub video_id: String,
    pub processing_time: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /api/transcribe
///
/// All errors funnel through here and become the uniform `{"error": ...}`
/// body; nothing escapes unconverted.
#[tracing::instrument(skip(state, payload))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    payload: Result<Json<TranscribeRequest>, JsonRejection>,
) -> Response {
    let started = Instant::now();

    let result = match payload {
        Ok(Json(request)) => process_request(&state, &request, started).await,
        // A body that is not valid JSON is a server-class failure, matching
        // the original behavior of the endpoint.
        Err(rejection) => Err(TranscribeError::InvalidBody(rejection.body_text())),
    };

    match result {
        Ok(response) => {
            tracing::info!(
                video_id = %response.video_id,
                processing_time = %response.processing_time,
                "Transcription completed"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Transcription request failed");
            (
                err.status_code(),
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// The linear request pipeline: validate, resolve credential, fetch, transcribe.
///
/// The temp file guard claimed here is dropped on every exit path, including
/// each `?`, so the scratch file never outlives the request.
async fn process_request(
    state: &AppState,
    request: &TranscribeRequest,
    started: Instant,
) -> Result<TranscribeResponse, TranscribeError> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(TranscribeError::MissingUrl);
    }

    let video_id = youtube::extract_video_id(url)
        .ok_or(TranscribeError::InvalidUrl)?
        .to_string();

    // Resolved per request; a missing credential aborts before any external call.
    let api_key = state.settings.resolve_api_key()?;

    let scratch = ScratchDir::new(&state.settings.scratch_dir);
    scratch.ensure()?;
    let audio = scratch.claim("mp3");

    state.fetcher.fetch(url, audio.path()).await?;

    let transcript = state.transcriber.transcribe(audio.path(), &api_key).await?;

    let elapsed = started.elapsed().as_secs_f64();

    Ok(TranscribeResponse {
        success: true,
        transcript,
        video_id,
        processing_time: format!("{:.1}秒", elapsed),
    })
}
