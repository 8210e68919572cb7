//! Flat table projection over the account snapshot
//!
//! Filtering and sorting mirror the behavior of the accounts table widget:
//! the filter is a case-insensitive substring match over the visible fields,
//! and sorting on the classification columns uses the human-facing label
//! rather than the numeric code.

use serde::{Deserialize, Serialize};

use super::models::GlAccount;

/// Columns displayed in the accounts table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Name,
    GlCode,
    GlAccountType,
    Disabled,
    ManualEntriesAllowed,
    UsedAs,
}

impl std::str::FromStr for SortColumn {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortColumn::Name),
            "glCode" => Ok(SortColumn::GlCode),
            "glAccountType" => Ok(SortColumn::GlAccountType),
            "disabled" => Ok(SortColumn::Disabled),
            "manualEntriesAllowed" => Ok(SortColumn::ManualEntriesAllowed),
            "usedAs" => Ok(SortColumn::UsedAs),
            _ => Err(format!("Invalid sort column: {}", s)),
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortColumn::Name => write!(f, "name"),
            SortColumn::GlCode => write!(f, "glCode"),
            SortColumn::GlAccountType => write!(f, "glAccountType"),
            SortColumn::Disabled => write!(f, "disabled"),
            SortColumn::ManualEntriesAllowed => write!(f, "manualEntriesAllowed"),
            SortColumn::UsedAs => write!(f, "usedAs"),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

/// Sort key accessor for one table cell.
///
/// The classification columns are structured values (code plus label);
/// ordering by the raw code would interleave unrelated types, so the key is
/// the canonical label. Every other column sorts on the field value as-is.
pub fn sort_key(account: &GlAccount, column: SortColumn) -> String {
    match column {
        SortColumn::Name => account.name.clone(),
        SortColumn::GlCode => account.gl_code.clone(),
        SortColumn::GlAccountType => account.account_type.label().to_string(),
        SortColumn::Disabled => account.disabled.to_string(),
        SortColumn::ManualEntriesAllowed => account.manual_entries_allowed.to_string(),
        SortColumn::UsedAs => account.usage.label().to_string(),
    }
}

/// Filterable, sortable table projection
#[derive(Debug, Default)]
pub struct AccountTable {
    rows: Vec<GlAccount>,
    filter: String,
    page_size: usize,
}

impl AccountTable {
    /// Create a table over one snapshot
    pub fn new(rows: Vec<GlAccount>, page_size: usize) -> Self {
        Self {
            rows,
            filter: String::new(),
            page_size,
        }
    }

    /// All rows, unfiltered, in snapshot order
    pub fn rows(&self) -> &[GlAccount] {
        &self.rows
    }

    /// Apply a filter; the empty string clears it
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.trim().to_lowercase();
    }

    /// The normalized filter currently applied
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Rows passing the filter, in snapshot order
    pub fn visible_rows(&self) -> Vec<&GlAccount> {
        self.rows
            .iter()
            .filter(|row| self.filter.is_empty() || row.filter_haystack().contains(&self.filter))
            .collect()
    }

    /// Visible rows ordered by the given column
    pub fn sorted_rows(&self, column: SortColumn, direction: SortDirection) -> Vec<&GlAccount> {
        let mut rows = self.visible_rows();
        rows.sort_by_key(|row| sort_key(row, column));
        if direction == SortDirection::Descending {
            rows.reverse();
        }
        rows
    }

    /// One page of the visible rows
    pub fn page(&self, offset: usize, limit: usize) -> Vec<&GlAccount> {
        self.visible_rows().into_iter().skip(offset).take(limit).collect()
    }

    /// Configured page size
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
