use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::TranscribeError;

/// Runtime settings resolved once at startup from the CLI.
///
/// The API credential is deliberately not part of this struct: it is read
/// from the environment on every request (see [`Settings::resolve_api_key`]),
/// so a key added or rotated while the server runs takes effect immediately
/// and its absence is a per-request error rather than a startup failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Scratch directory for downloaded audio files
    pub scratch_dir: PathBuf,

    /// Path to the yt-dlp executable
    pub yt_dlp_path: String,

    /// Name of the environment variable holding the API credential
    pub api_key_env: String,

    /// Whisper API settings
    pub whisper: WhisperConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperConfig {
    /// Base URL of the OpenAI-compatible API
    pub api_base: String,

    /// Transcription model
    pub model: String,

    /// Language to transcribe in (ISO 639-1)
    pub language: String,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            scratch_dir: cli.temp_dir.clone(),
            yt_dlp_path: cli.yt_dlp.clone(),
            api_key_env: cli.api_key_env.clone(),
            whisper: WhisperConfig {
                api_base: cli.api_base.clone(),
                model: "whisper-1".to_string(),
                language: "ja".to_string(),
            },
        }
    }

    /// Read the API credential from the environment.
    ///
    /// Called per request, not at startup. Absent or empty values both count
    /// as missing.
    pub fn resolve_api_key(&self) -> Result<String, TranscribeError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(TranscribeError::MissingApiKey(self.api_key_env.clone())),
        }
    }
}
