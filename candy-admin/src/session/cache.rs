//! Persisted session cache
//!
//! The last signed-in session is kept at `{work_dir}/auth/session.json`
//! so the CLI stays signed in between runs.

use std::path::{Path, PathBuf};

use candy_client::Session;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionCacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct SessionCache {
    /// Cache file path: {work_dir}/auth/session.json
    file_path: PathBuf,
}

impl SessionCache {
    pub fn new(work_dir: &Path) -> Self {
        Self {
            file_path: work_dir.join("auth/session.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the cached session, `None` when nothing was saved
    pub fn load(&self) -> Result<Option<Session>, SessionCacheError> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.file_path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionCacheError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(path = %self.file_path.display(), "Session cached");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionCacheError> {
        match std::fs::remove_file(&self.file_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
