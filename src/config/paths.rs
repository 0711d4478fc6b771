//! Path management for Smart Budget
//!
//! ## Path Resolution Order
//!
//! 1. `SMART_BUDGET_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/smart-budget` on Linux, `%APPDATA%` on Windows, ...)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SmartBudgetError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SMART_BUDGET_DATA_DIR";

/// Manages all paths used by Smart Budget
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SmartBudgetError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted session snapshot
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Get the default directory for exported reports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), SmartBudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SmartBudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir()).map_err(|e| {
            SmartBudgetError::Io(format!("Failed to create export directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if Smart Budget has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SmartBudgetError> {
    ProjectDirs::from("", "", "smart-budget")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SmartBudgetError::Config("Could not determine home directory".into()))
}
