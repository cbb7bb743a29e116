use async_trait::async_trait;
use std::path::Path;

use crate::TranscribeError;

pub mod whisper;

pub use whisper::WhisperClient;

/// Sends a local audio file to a hosted speech-to-text service.
///
/// The API credential is resolved per request and handed in by the caller, so
/// implementations never read the environment themselves and tests can drive
/// the credential path deterministically.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe the audio file at `audio` and return plain text.
    async fn transcribe(&self, audio: &Path, api_key: &str) -> Result<String, TranscribeError>;
}
