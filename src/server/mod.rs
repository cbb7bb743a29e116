use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Settings;
use crate::fetch::AudioFetcher;
use crate::transcribe::SpeechToText;

pub mod handlers;

pub use handlers::{ErrorResponse, TranscribeRequest, TranscribeResponse};

/// Shared server state: the two collaborators behind trait objects, plus settings.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn AudioFetcher>,
    pub transcriber: Arc<dyn SpeechToText>,
    pub settings: Settings,
}

pub fn create_router(state: AppState) -> Router {
    // The web form is served elsewhere, so allow it to call us from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/transcribe", post(handlers::transcribe_handler))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
