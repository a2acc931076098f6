use crate::constants::{SESSION_FILE_EXTENSION, SESSION_NAME_MAX_LENGTH};
use crate::core_session::error::SessionError;
use chrono::{DateTime, Local};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Strips everything but alphanumerics, `-` and `_` so a name cannot leave the sessions directory.
pub fn sanitize_session_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .take(SESSION_NAME_MAX_LENGTH)
        .collect()
}

#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub name: String,
    pub size_bytes: u64,
    pub last_modified: Option<DateTime<Local>>,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn session_path(&self, name: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", sanitize_session_name(name), SESSION_FILE_EXTENSION))
    }

    /// All sessions, sorted by name. A missing directory means no sessions.
    pub fn list(&self) -> Result<Vec<SessionInfo>, SessionError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|e| self.storage_error(&self.dir, e))?;

        let mut sessions = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.storage_error(&self.dir, e))?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) != Some(SESSION_FILE_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                warn!("Skipping session file with non UTF-8 name: {}", path.display());
                continue;
            };

            sessions.push(self.describe(name, path)?);
        }

        sessions.sort_by(|a, b| a.name.cmp(&b.name));
        info!("Found {} sessions", sessions.len());
        Ok(sessions)
    }

    pub fn info(&self, name: &str) -> Result<SessionInfo, SessionError> {
        let safe_name = self.checked_name(name)?;
        let path = self.session_path(&safe_name);
        if !path.is_file() {
            return Err(SessionError::NotFound(safe_name));
        }
        self.describe(safe_name, path)
    }

    pub fn delete(&self, name: &str) -> Result<(), SessionError> {
        let safe_name = self.checked_name(name)?;
        let path = self.session_path(&safe_name);
        if !path.is_file() {
            warn!("Session not found: {}", path.display());
            return Err(SessionError::NotFound(safe_name));
        }

        std::fs::remove_file(&path).map_err(|e| self.storage_error(&path, e))?;
        info!("Deleted session: {}", path.display());
        Ok(())
    }

    fn checked_name(&self, name: &str) -> Result<String, SessionError> {
        let safe_name = sanitize_session_name(name);
        if safe_name.is_empty() {
            return Err(SessionError::InvalidName(name.to_string()));
        }
        Ok(safe_name)
    }

    fn describe(&self, name: String, path: PathBuf) -> Result<SessionInfo, SessionError> {
        let metadata = std::fs::metadata(&path).map_err(|e| self.storage_error(&path, e))?;
        Ok(SessionInfo {
            name,
            size_bytes: metadata.len(),
            last_modified: metadata.modified().ok().map(DateTime::<Local>::from),
            path,
        })
    }

    fn storage_error(&self, path: &Path, source: std::io::Error) -> SessionError {
        SessionError::Storage {
            path: path.display().to_string(),
            source,
        }
    }
}
