use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use super::AudioFetcher;
use crate::TranscribeError;

/// Audio fetcher backed by the yt-dlp command-line tool
pub struct YtDlpFetcher {
    yt_dlp_path: String,
}

/// Largest audio file we will accept from yt-dlp.
const MAX_FILESIZE: &str = "100M";

impl YtDlpFetcher {
    pub fn new(yt_dlp_path: impl Into<String>) -> Self {
        Self {
            yt_dlp_path: yt_dlp_path.into(),
        }
    }

    /// Arguments for a single-video, audio-only mp3 download capped at 100 MB.
    fn download_args(url: &str, output: &Path) -> Vec<String> {
        vec![
            "-x".to_string(),
            "--audio-format".to_string(),
            "mp3".to_string(),
            "--audio-quality".to_string(),
            "5".to_string(),
            "-o".to_string(),
            output.to_string_lossy().into_owned(),
            "--no-playlist".to_string(),
            "--max-filesize".to_string(),
            MAX_FILESIZE.to_string(),
            url.to_string(),
        ]
    }
}

impl Default for YtDlpFetcher {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

#[async_trait]
impl AudioFetcher for YtDlpFetcher {
    async fn fetch(&self, url: &str, output: &Path) -> Result<(), TranscribeError> {
        tracing::debug!(url = %url, output = %output.display(), "Invoking yt-dlp");

        let result = Command::new(&self.yt_dlp_path)
            .args(Self::download_args(url, output))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match result {
            // Spawn failure: the tool itself is missing or unreachable.
            Err(e) if e.kind() == ErrorKind::NotFound => Err(TranscribeError::DownloaderUnavailable(
                format!(
                    "yt-dlp not found. Please install it: https://github.com/yt-dlp/yt-dlp ({})",
                    e
                ),
            )),
            Err(e) => Err(TranscribeError::DownloaderUnavailable(format!(
                "Failed to run yt-dlp: {}",
                e
            ))),
            Ok(out) if !out.status.success() => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                Err(TranscribeError::DownloadFailed(format!(
                    "yt-dlp failed: {}",
                    stderr
                )))
            }
            Ok(_) => {
                tracing::debug!(output = %output.display(), "Audio download complete");
                Ok(())
            }
        }
    }
}
