//! User settings for Smart Budget
//!
//! Manages user preferences: currency symbol, default savings rate, the CSV
//! delimiter used for imports, and the starting values of the growth
//! simulator.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::SmartBudgetError;
use crate::services::growth::GrowthInputs;

/// Highest savings rate the calculator accepts, in percent
pub const MAX_SAVINGS_RATE: f64 = 50.0;

/// User settings for Smart Budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Savings rate (percent) for a fresh session
    #[serde(default = "default_savings_rate")]
    pub default_savings_rate: f64,

    /// Field delimiter for CSV imports
    #[serde(default = "default_delimiter")]
    pub csv_delimiter: char,

    /// Starting values of the growth simulator
    #[serde(default)]
    pub growth: GrowthInputs,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_savings_rate() -> f64 {
    20.0
}

fn default_delimiter() -> char {
    ','
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_savings_rate: default_savings_rate(),
            csv_delimiter: default_delimiter(),
            growth: GrowthInputs::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, SmartBudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SmartBudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            SmartBudgetError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), SmartBudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SmartBudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SmartBudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings a hand-edited config file could contain
    pub fn validate(&self) -> Result<(), SmartBudgetError> {
        if !(0.0..=MAX_SAVINGS_RATE).contains(&self.default_savings_rate) {
            return Err(SmartBudgetError::Config(format!(
                "default_savings_rate must be between 0 and {}, got {}",
                MAX_SAVINGS_RATE, self.default_savings_rate
            )));
        }
        if !self.csv_delimiter.is_ascii() {
            return Err(SmartBudgetError::Config(format!(
                "csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            )));
        }
        self.growth
            .validate()
            .map_err(|e| SmartBudgetError::Config(e.to_string()))
    }

    /// The CSV delimiter as the byte the csv reader expects
    pub fn delimiter_byte(&self) -> u8 {
        // validate() guarantees ASCII
        self.csv_delimiter as u8
    }
}
