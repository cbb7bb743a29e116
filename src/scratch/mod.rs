//! Scratch directory and per-request temp file ownership.
//!
//! Each request claims a uniquely named file under a shared scratch directory
//! and owns it exclusively. The guard removes the file when dropped, which
//! covers normal returns, `?` early returns, and panics alike.

use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::TranscribeError;

/// A well-known directory for short-lived intermediate files
#[derive(Debug, Clone)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the scratch directory if it does not exist yet. Idempotent.
    pub fn ensure(&self) -> Result<(), TranscribeError> {
        fs_err::create_dir_all(&self.root)
            .map_err(|e| TranscribeError::File(e.to_string()))
    }

    /// Claim a freshly named file path with the given extension.
    ///
    /// Names are UUIDv4, so concurrent requests never collide and no locking
    /// is needed. The file itself is not created here; the downloader writes it.
    pub fn claim(&self, extension: &str) -> TempAudioFile {
        let path = self.root.join(format!("{}.{}", Uuid::new_v4(), extension));
        TempAudioFile { path }
    }
}

/// Owns one temp file path for the duration of a request
#[derive(Debug)]
pub struct TempAudioFile {
    path: PathBuf,
}

impl TempAudioFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempAudioFile {
    fn drop(&mut self) {
        if self.path.exists() {
            // Cleanup failures must never mask the request outcome.
            if let Err(e) = fs_err::remove_file(&self.path) {
                tracing::debug!(path = %self.path.display(), error = %e, "Temp file cleanup failed");
            }
        }
    }
}
