//! mobie2text - a small web service that turns a YouTube URL into a Japanese transcript
//!
//! The pipeline is deliberately thin: validate the URL, download the audio track with
//! yt-dlp, send it to the OpenAI Whisper API, and return the text. Temp files are
//! removed on every exit path.

pub mod cli;
pub mod config;
pub mod fetch;
pub mod scratch;
pub mod server;
pub mod transcribe;
pub mod utils;
pub mod youtube;

pub use cli::Cli;
pub use config::{Settings, WhisperConfig};
pub use fetch::{AudioFetcher, YtDlpFetcher};
pub use scratch::{ScratchDir, TempAudioFile};
pub use server::{create_router, AppState};
pub use transcribe::{SpeechToText, WhisperClient};

use axum::http::StatusCode;

/// Errors a transcription request can surface to the client
#[derive(thiserror::Error, Debug)]
pub enum TranscribeError {
    #[error("URLが必要です")]
    MissingUrl,

    #[error("有効なYouTube URLを入力してください")]
    InvalidUrl,

    #[error("{0}が設定されていません")]
    MissingApiKey(String),

    #[error("{0}")]
    DownloaderUnavailable(String),

    #[error("{0}")]
    DownloadFailed(String),

    #[error("{0}")]
    TranscriptionFailed(String),

    #[error("{0}")]
    InvalidBody(String),

    #[error("File operation failed: {0}")]
    File(String),
}

impl TranscribeError {
    /// Client errors are user-correctable; everything else is a server-side failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            TranscribeError::MissingUrl | TranscribeError::InvalidUrl => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
