//! Session state
//!
//! Everything the user has entered so far, plus the last computed results.
//! The session is the source of truth; results are a disposable snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::expense::{default_expenses, ExpenseRecord, RECURRING_TYPE, TEMPORARY_TYPE};
use super::results::BudgetResults;
use super::vocabulary::Vocabulary;

/// Savings rate of a fresh session, in percent
pub const DEFAULT_SAVINGS_RATE: f64 = 20.0;

/// The persisted session snapshot
///
/// Serialized keys keep the legacy snapshot layout
/// (`salaire`, `complement`, `depenses`, `tauxEpargne`, `resultats`,
/// `showResults`); the discovered vocabularies ride along under
/// `categories`, `comptes` and `typesDepense`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSession {
    /// Main income as entered
    #[serde(rename = "salaire", default)]
    pub income: String,

    /// Supplemental income as entered
    #[serde(rename = "complement", default)]
    pub supplemental_income: String,

    #[serde(rename = "depenses", default = "default_expenses")]
    pub expenses: Vec<ExpenseRecord>,

    /// Percentage of total income set aside
    #[serde(rename = "tauxEpargne", default = "default_savings_rate")]
    pub savings_rate: f64,

    /// Last computed results, if any. A shape that no longer parses is
    /// dropped rather than failing the whole snapshot.
    #[serde(rename = "resultats", default, deserialize_with = "lenient_results")]
    pub results: Option<BudgetResults>,

    #[serde(rename = "showResults", default)]
    pub show_results: bool,

    #[serde(default)]
    pub categories: Vocabulary,

    #[serde(rename = "comptes", default)]
    pub accounts: Vocabulary,

    #[serde(rename = "typesDepense", default = "default_types")]
    pub types: Vocabulary,

    /// When the snapshot was last written
    #[serde(rename = "savedAt", default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

fn lenient_results<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BudgetResults>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match BudgetResults::deserialize(value) {
        Ok(results) => Some(results),
        Err(e) => {
            warn!(error = %e, "discarding stored results");
            None
        }
    }))
}

fn default_savings_rate() -> f64 {
    DEFAULT_SAVINGS_RATE
}

/// Type vocabulary before any import: `Recurring`, `Temporary`
pub fn default_types() -> Vocabulary {
    [RECURRING_TYPE, TEMPORARY_TYPE].into_iter().collect()
}

impl Default for BudgetSession {
    fn default() -> Self {
        Self {
            income: String::new(),
            supplemental_income: String::new(),
            expenses: default_expenses(),
            savings_rate: DEFAULT_SAVINGS_RATE,
            results: None,
            show_results: false,
            categories: Vocabulary::new(),
            accounts: Vocabulary::new(),
            types: default_types(),
            saved_at: None,
        }
    }
}

impl BudgetSession {
    /// A fresh session with a custom savings rate
    pub fn with_savings_rate(savings_rate: f64) -> Self {
        Self {
            savings_rate,
            ..Self::default()
        }
    }

    /// Look up an expense by id
    pub fn expense(&self, id: u32) -> Option<&ExpenseRecord> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Id for the next new expense: max existing + 1, or 1
    pub fn next_expense_id(&self) -> u32 {
        self.expenses.iter().map(|e| e.id).max().map_or(1, |max| max + 1)
    }
}
