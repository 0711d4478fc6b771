//! Expense model
//!
//! One line of the monthly budget. Amounts stay as the text the user typed;
//! they are interpreted with [`parse_amount_or_zero`] whenever a figure is
//! needed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::parse_amount_or_zero;
use super::palette::palette_color;

/// Type label marking an expense as recurring (fixed)
pub const RECURRING_TYPE: &str = "Recurring";

/// Type label marking an expense as temporary (variable)
pub const TEMPORARY_TYPE: &str = "Temporary";

/// Token in the `Paid` column meaning the expense has been paid
pub const PAID_TOKEN: &str = "Yes";

/// Bucket name for expenses without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Bucket name for expenses without an account
pub const MAIN_ACCOUNT: &str = "Main account";

/// Whether a type label classifies an expense as recurring
pub fn is_recurring_type(label: &str) -> bool {
    label == RECURRING_TYPE
}

/// A single budget line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Unique within the session, assigned as max existing + 1
    pub id: u32,

    /// Free-text label
    #[serde(default, alias = "nom")]
    pub name: String,

    /// Amount as entered; blank or unparsable counts as zero
    #[serde(default, alias = "montant")]
    pub amount: String,

    /// Category name; empty means "Uncategorized" when aggregating
    #[serde(default, alias = "categorie")]
    pub category: String,

    /// Recurring expenses are fixed, the others variable
    #[serde(default, alias = "fixe")]
    pub is_recurring: bool,

    /// Chart swatch
    #[serde(default, alias = "couleur")]
    pub color: String,

    /// Type label from the type vocabulary
    #[serde(default, rename = "type")]
    pub expense_type: String,

    /// Account name; empty means "Main account" when aggregating
    #[serde(default, alias = "compte")]
    pub account: String,

    /// Display-only paid marker
    #[serde(default, alias = "paye")]
    pub is_paid: bool,
}

impl ExpenseRecord {
    /// Create an empty expense with the given id
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            amount: String::new(),
            category: String::new(),
            is_recurring: false,
            color: palette_color(0).to_string(),
            expense_type: String::new(),
            account: String::new(),
            is_paid: false,
        }
    }

    /// Builder-style amount setter
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Builder-style category setter
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder-style account setter
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// Builder-style setter for the type label, which also sets the recurrence flag
    pub fn with_type(mut self, expense_type: impl Into<String>) -> Self {
        self.set_type(expense_type);
        self
    }

    /// Set the type label and derive the recurrence flag from it
    pub fn set_type(&mut self, expense_type: impl Into<String>) {
        self.expense_type = expense_type.into();
        self.is_recurring = is_recurring_type(&self.expense_type);
    }

    /// Numeric value of the amount text (zero when blank or unparsable)
    pub fn amount_value(&self) -> f64 {
        parse_amount_or_zero(&self.amount)
    }

    /// Category used for aggregation
    pub fn effective_category(&self) -> &str {
        if self.category.is_empty() {
            UNCATEGORIZED
        } else {
            &self.category
        }
    }

    /// Account used for aggregation
    pub fn effective_account(&self) -> &str {
        if self.account.is_empty() {
            MAIN_ACCOUNT
        } else {
            &self.account
        }
    }
}

/// The editable fields of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Name,
    Amount,
    Category,
    Type,
    Account,
    Paid,
}

impl FromStr for ExpenseField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "amount" => Ok(Self::Amount),
            "category" => Ok(Self::Category),
            "type" => Ok(Self::Type),
            "account" => Ok(Self::Account),
            "paid" => Ok(Self::Paid),
            other => Err(format!(
                "unknown field '{}' (expected name, amount, category, type, account or paid)",
                other
            )),
        }
    }
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Amount => write!(f, "amount"),
            Self::Category => write!(f, "category"),
            Self::Type => write!(f, "type"),
            Self::Account => write!(f, "account"),
            Self::Paid => write!(f, "paid"),
        }
    }
}

/// The four starter lines of a fresh session
pub fn default_expenses() -> Vec<ExpenseRecord> {
    [
        ("Housing", RECURRING_TYPE),
        ("Food", RECURRING_TYPE),
        ("Transport", RECURRING_TYPE),
        ("Leisure", TEMPORARY_TYPE),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (category, expense_type))| {
        let mut expense = ExpenseRecord::new(index as u32 + 1)
            .with_category(category)
            .with_type(expense_type);
        expense.color = palette_color(index).to_string();
        expense
    })
    .collect()
}
