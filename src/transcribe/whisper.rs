use async_trait::async_trait;
use reqwest::multipart;
use std::path::Path;
use std::time::Duration;

use super::SpeechToText;
use crate::config::WhisperConfig;
use crate::TranscribeError;

/// Speech-to-text client for the OpenAI audio transcription API
pub struct WhisperClient {
    client: reqwest::Client,
    config: WhisperConfig,
}

/// The service imposes no timeout of its own, so we set one rather than
/// letting a stuck upload hang the request forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

impl WhisperClient {
    pub fn new(config: WhisperConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SpeechToText for WhisperClient {
    async fn transcribe(&self, audio: &Path, api_key: &str) -> Result<String, TranscribeError> {
        let url = format!("{}/audio/transcriptions", self.config.api_base);

        let audio_bytes = tokio::fs::read(audio)
            .await
            .map_err(|e| TranscribeError::File(format!("{}: {}", audio.display(), e)))?;

        let file_part = multipart::Part::bytes(audio_bytes)
            .file_name("audio.mp3")
            .mime_str("audio/mpeg")
            .map_err(|e| TranscribeError::TranscriptionFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.config.model.clone())
            .text("language", self.config.language.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(
            model = %self.config.model,
            language = %self.config.language,
            "Sending audio to Whisper API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .timeout(REQUEST_TIMEOUT)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscribeError::TranscriptionFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscribeError::TranscriptionFailed(format!(
                "Transcription API returned status {}: {}",
                status, body
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscribeError::TranscriptionFailed(format!("body: {}", e)))?;

        tracing::info!(chars = transcript.len(), "Whisper transcription completed");

        Ok(transcript.trim().to_string())
    }
}
