//! Storage layer for Smart Budget
//!
//! JSON file storage with atomic writes. The session is a single snapshot
//! file under the data directory.

pub mod file_io;
pub mod session;

pub use file_io::{read_json, remove_if_exists, write_json_atomic};
pub use session::SessionStore;

use crate::config::paths::BudgetPaths;
use crate::error::SmartBudgetResult;

/// Create the data directories and return the session store
pub fn open_session_store(paths: &BudgetPaths) -> SmartBudgetResult<SessionStore> {
    paths.ensure_directories()?;
    Ok(SessionStore::new(paths.session_file()))
}
