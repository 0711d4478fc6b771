//! Session snapshot storage
//!
//! The whole session lives in one JSON file that is overwritten on every
//! save and read once at startup.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, warn};

use super::file_io::{read_json, remove_if_exists, write_json_atomic};
use crate::error::SmartBudgetResult;
use crate::models::BudgetSession;

/// Loads and saves the session snapshot
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the snapshot file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read the stored session
    ///
    /// A missing file gives `None`. So does an unreadable or corrupt one,
    /// after a warning: it is moved aside to [`Self::backup_path`] and the
    /// caller starts over with a fresh session.
    pub fn load(&self) -> Option<BudgetSession> {
        match read_json::<BudgetSession, _>(&self.path) {
            Ok(session) => {
                debug!(path = %self.path.display(), found = session.is_some(), "session loaded");
                session
            }
            Err(e) => {
                let backup = self.backup_path();
                match fs::rename(&self.path, &backup) {
                    Ok(()) => warn!(
                        error = %e,
                        backup = %backup.display(),
                        "stored session is unreadable, starting fresh"
                    ),
                    Err(rename_err) => warn!(
                        error = %e,
                        backup_error = %rename_err,
                        "stored session is unreadable, starting fresh"
                    ),
                }
                None
            }
        }
    }

    /// Where an unreadable snapshot is moved: `session.json.bak`
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    /// Read the stored session, or a fresh one with the given savings rate
    pub fn load_or_default(&self, savings_rate: f64) -> BudgetSession {
        self.load()
            .unwrap_or_else(|| BudgetSession::with_savings_rate(savings_rate))
    }

    /// Overwrite the snapshot with `session`, stamping the save time
    pub fn save(&self, session: &mut BudgetSession) -> SmartBudgetResult<()> {
        session.saved_at = Some(Utc::now());
        write_json_atomic(&self.path, session)?;
        debug!(path = %self.path.display(), expenses = session.expenses.len(), "session saved");
        Ok(())
    }

    /// Delete the snapshot
    pub fn clear(&self) -> SmartBudgetResult<bool> {
        remove_if_exists(&self.path)
    }

    /// Whether a snapshot exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
