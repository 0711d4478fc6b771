//! CSV import service
//!
//! Turns a delimited expense export into typed [`ExpenseRecord`]s. Parsing is
//! split in two stages:
//!
//! 1. [`parse_csv_rows`] reads the text into raw rows (column label to
//!    string). Structurally broken input fails the whole import.
//! 2. [`normalize_rows`] converts raw rows into expenses, discovering the
//!    category, account and type vocabularies on the way. It never fails.
//!
//! Recognized columns are `Name`, `Category`, `Amount`, `Type`, `Account` and
//! `Paid`; the French headers of the legacy export (`Catégorie`,
//! `Montant`, `Compte`, `Payé`, `Nom`) are accepted too. Other columns are
//! ignored.

use std::collections::HashMap;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::error::{SmartBudgetError, SmartBudgetResult};
use crate::models::{
    amount_to_text, is_recurring_type, palette_color, parse_amount_or_zero, ExpenseRecord,
    Vocabulary, PAID_TOKEN,
};

/// One parsed CSV row: column label to cell text
pub type RawRow = HashMap<String, String>;

/// The columns an expense import understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportColumn {
    Name,
    Category,
    Amount,
    Type,
    Account,
    Paid,
}

impl ImportColumn {
    /// Header labels accepted for this column
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Name => &["Name", "Nom"],
            Self::Category => &["Category", "Catégorie"],
            Self::Amount => &["Amount", "Montant"],
            Self::Type => &["Type"],
            Self::Account => &["Account", "Compte"],
            Self::Paid => &["Paid", "Payé"],
        }
    }

    /// Cell of this column in a row, empty when the column is missing
    pub fn get(self, row: &RawRow) -> &str {
        self.labels()
            .iter()
            .find_map(|label| row.get(*label))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Result of normalizing an import
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedImport {
    /// Expenses in row order, ids 1..=n
    pub expenses: Vec<ExpenseRecord>,
    /// Distinct non-empty categories in first-seen order
    pub categories: Vocabulary,
    /// Distinct non-empty accounts in first-seen order
    pub accounts: Vocabulary,
    /// Distinct non-empty type labels in first-seen order
    pub types: Vocabulary,
}

/// Read delimited text into raw rows
///
/// The first line is the header. Blank lines are skipped and a UTF-8 byte
/// order mark is ignored. A row whose field count differs from the header is
/// a structural error and aborts the import.
pub fn parse_csv_rows(text: &str, delimiter: u8) -> SmartBudgetResult<Vec<RawRow>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| SmartBudgetError::Import(format!("Could not read CSV header: {}", e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            SmartBudgetError::Import(format!("Malformed CSV at data row {}: {}", index + 1, e))
        })?;

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.clone(), cell.to_string()))
            .collect();
        rows.push(row);
    }

    debug!(rows = rows.len(), columns = headers.len(), "parsed CSV rows");
    Ok(rows)
}

/// Convert raw rows into expenses
///
/// - amount: lenient parse, stored back as plain number text
/// - recurrence: `Type` equals `"Recurring"` exactly
/// - colour: position of the category in the discovered vocabulary, cycled
///   over the palette; rows without a category use the slot after the last
///   named category
/// - id: 1-based row position
/// - paid: `Paid` equals `"Yes"` exactly
pub fn normalize_rows(rows: &[RawRow]) -> NormalizedImport {
    let categories: Vocabulary = rows.iter().map(|r| ImportColumn::Category.get(r)).collect();
    let accounts: Vocabulary = rows.iter().map(|r| ImportColumn::Account.get(r)).collect();
    let types: Vocabulary = rows.iter().map(|r| ImportColumn::Type.get(r)).collect();

    let expenses = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let category = ImportColumn::Category.get(row);
            let expense_type = ImportColumn::Type.get(row);
            let color_index = categories.position(category).unwrap_or(categories.len());

            ExpenseRecord {
                id: index as u32 + 1,
                name: ImportColumn::Name.get(row).to_string(),
                amount: amount_to_text(parse_amount_or_zero(ImportColumn::Amount.get(row))),
                category: category.to_string(),
                is_recurring: is_recurring_type(expense_type),
                color: palette_color(color_index).to_string(),
                expense_type: expense_type.to_string(),
                account: ImportColumn::Account.get(row).to_string(),
                is_paid: ImportColumn::Paid.get(row) == PAID_TOKEN,
            }
        })
        .collect();

    NormalizedImport {
        expenses,
        categories,
        accounts,
        types,
    }
}

/// Parse and normalize CSV text in one step
pub fn import_csv_text(text: &str, delimiter: u8) -> SmartBudgetResult<NormalizedImport> {
    let rows = parse_csv_rows(text, delimiter)?;
    Ok(normalize_rows(&rows))
}

/// Read a CSV file and normalize it
pub fn import_csv_file(path: &Path, delimiter: u8) -> SmartBudgetResult<NormalizedImport> {
    info!(path = %path.display(), "importing expenses");

    let bytes = std::fs::read(path).map_err(|e| {
        SmartBudgetError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let text = String::from_utf8(bytes).map_err(|_| {
        SmartBudgetError::Import(format!("{} is not valid UTF-8 text", path.display()))
    })?;

    let import = import_csv_text(&text, delimiter)?;
    info!(
        expenses = import.expenses.len(),
        categories = import.categories.len(),
        accounts = import.accounts.len(),
        "import parsed"
    );
    Ok(import)
}
