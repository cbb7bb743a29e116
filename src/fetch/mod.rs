use async_trait::async_trait;
use std::path::Path;

use crate::TranscribeError;

pub mod yt_dlp;

pub use yt_dlp::YtDlpFetcher;

/// Downloads the audio track of a remote video to a local file.
///
/// The production implementation shells out to yt-dlp; tests substitute a
/// double so no external process is ever spawned.
#[async_trait]
pub trait AudioFetcher: Send + Sync {
    /// Download and transcode the audio for `url`, writing it to `output`.
    ///
    /// On success the file exists at `output`. A single failure aborts the
    /// request; no retry is attempted.
    async fn fetch(&self, url: &str, output: &Path) -> Result<(), TranscribeError>;
}
