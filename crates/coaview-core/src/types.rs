//! Basic types for the chart of accounts

use serde::{Deserialize, Serialize};

/// General-ledger account classification
///
/// The upstream service encodes the classification as a structured value
/// carrying both a numeric code and a human-facing label. Sorting and
/// filtering always operate on the label, never on the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlAccountType {
    /// Asset accounts (cash, bank, receivables)
    Asset,
    /// Liability accounts (payables, loans)
    Liability,
    /// Equity accounts
    Equity,
    /// Income accounts
    Income,
    /// Expense accounts
    Expense,
}

impl GlAccountType {
    /// Numeric code used by the upstream service
    pub fn code(&self) -> u8 {
        match self {
            GlAccountType::Asset => 1,
            GlAccountType::Liability => 2,
            GlAccountType::Equity => 3,
            GlAccountType::Income => 4,
            GlAccountType::Expense => 5,
        }
    }

    /// Canonical human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            GlAccountType::Asset => "Asset",
            GlAccountType::Liability => "Liability",
            GlAccountType::Equity => "Equity",
            GlAccountType::Income => "Income",
            GlAccountType::Expense => "Expense",
        }
    }
}

impl Default for GlAccountType {
    fn default() -> Self {
        GlAccountType::Asset
    }
}

impl std::str::FromStr for GlAccountType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asset" | "assets" => Ok(GlAccountType::Asset),
            "liability" | "liabilities" => Ok(GlAccountType::Liability),
            "equity" => Ok(GlAccountType::Equity),
            "income" => Ok(GlAccountType::Income),
            "expense" | "expenses" => Ok(GlAccountType::Expense),
            _ => Err(format!("Invalid account type: {}", s)),
        }
    }
}

impl std::fmt::Display for GlAccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How an account is used in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountUsage {
    /// Postable account that carries journal entries
    Detail,
    /// Grouping account; entries are never posted to it directly
    Header,
}

impl AccountUsage {
    /// Numeric code used by the upstream service
    pub fn code(&self) -> u8 {
        match self {
            AccountUsage::Detail => 1,
            AccountUsage::Header => 2,
        }
    }

    /// Canonical human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            AccountUsage::Detail => "Detail",
            AccountUsage::Header => "Header",
        }
    }
}

impl Default for AccountUsage {
    fn default() -> Self {
        AccountUsage::Detail
    }
}

impl std::str::FromStr for AccountUsage {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "detail" => Ok(AccountUsage::Detail),
            "header" => Ok(AccountUsage::Header),
            _ => Err(format!("Invalid account usage: {}", s)),
        }
    }
}

impl std::fmt::Display for AccountUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_codes_and_labels() {
        assert_eq!(GlAccountType::Asset.code(), 1);
        assert_eq!(GlAccountType::Expense.code(), 5);
        assert_eq!(GlAccountType::Liability.label(), "Liability");
        assert_eq!(GlAccountType::Income.to_string(), "Income");
    }

    #[test]
    fn test_account_type_from_str() {
        assert_eq!("asset".parse::<GlAccountType>().unwrap(), GlAccountType::Asset);
        assert_eq!("Expenses".parse::<GlAccountType>().unwrap(), GlAccountType::Expense);
        assert!("revenue".parse::<GlAccountType>().is_err());
    }

    #[test]
    fn test_usage_codes_and_labels() {
        assert_eq!(AccountUsage::Detail.code(), 1);
        assert_eq!(AccountUsage::Header.code(), 2);
        assert_eq!(AccountUsage::Header.label(), "Header");
        assert_eq!("detail".parse::<AccountUsage>().unwrap(), AccountUsage::Detail);
        assert!("summary".parse::<AccountUsage>().is_err());
    }
}
