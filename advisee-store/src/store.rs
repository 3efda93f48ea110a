//! JSON session file

use std::io::Write;
use std::path::{Path, PathBuf};

use advisee_core::{EntryScope, SessionState};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Format version written to new session files
pub const SESSION_FILE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct SessionFile<S> {
    version: u32,
    session: S,
}

/// Handle to a session file on disk
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Use the session file at the default location
    ///
    /// Location: `~/.local/share/advisee/session.json` on Linux
    pub fn open_default() -> Result<Self> {
        Ok(Self::open_at(Self::default_path()?))
    }

    /// Use a session file at a specific path
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the default session file path
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|p| p.join("advisee").join("session.json"))
            .ok_or_else(|| Error::InvalidData("Failed to determine data directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the stored session, or start a fresh one if there is no file yet
    ///
    /// Entries carrying more than `max_credits` are rejected as invalid data.
    pub fn load(&self, scope: EntryScope, max_credits: u32) -> Result<SessionState> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No session file, starting fresh");
            return Ok(SessionState::new(scope));
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let file: SessionFile<SessionState> = serde_json::from_str(&contents)?;
        if file.version != SESSION_FILE_VERSION {
            return Err(Error::InvalidData(format!(
                "Unsupported session file version {} in {}",
                file.version,
                self.path.display()
            )));
        }

        let mut session = file.session;
        if let Some((key, entry)) = session.entries().find(|(_, e)| e.credits > max_credits) {
            return Err(Error::InvalidData(format!(
                "Entry {} has {} credits (allowed 0-{}) in {}",
                key,
                entry.credits,
                max_credits,
                self.path.display()
            )));
        }
        session.set_scope(scope);
        tracing::debug!(
            path = %self.path.display(),
            entries = session.entry_count(),
            "Session loaded"
        );
        Ok(session)
    }

    /// Write the session, replacing any previous file
    pub fn save(&self, session: &SessionState) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| {
            Error::InvalidData(format!("Failed to create session directory: {}", e))
        })?;

        let file = SessionFile {
            version: SESSION_FILE_VERSION,
            session,
        };
        let json = serde_json::to_string_pretty(&file)?;

        // Write beside the target, then rename over it. The temp file is
        // removed if the rename fails.
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        tracing::info!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    /// Delete the session file. Returns whether a file was removed.
    pub fn reset(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)?;
        tracing::info!(path = %self.path.display(), "Session file removed");
        Ok(true)
    }
}
