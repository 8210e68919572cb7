//! Core data models for the chart of accounts

use serde::{Deserialize, Serialize};

use super::types::{AccountUsage, GlAccountType};

/// A general-ledger account as delivered by the snapshot provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlAccount {
    /// Unique, stable account identifier
    pub id: u64,
    /// Human-facing GL code; empty for header/placeholder nodes
    #[serde(default)]
    pub gl_code: String,
    /// Account name
    pub name: String,
    /// Account classification
    pub account_type: GlAccountType,
    /// Header or detail usage
    pub usage: AccountUsage,
    /// Whether the account is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Whether manual journal entries are allowed
    #[serde(default)]
    pub manual_entries_allowed: bool,
    /// Parent account reference; absent for root accounts
    #[serde(default)]
    pub parent_id: Option<u64>,
}

impl GlAccount {
    /// Check if this is a structural placeholder without a postable identity
    pub fn is_placeholder(&self) -> bool {
        self.gl_code.is_empty()
    }

    /// Check if this is a root account
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Lowercased composite of the visible fields, used for table filtering
    pub fn filter_haystack(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.name,
            self.gl_code,
            self.account_type.label(),
            self.usage.label(),
            self.disabled,
            self.manual_entries_allowed
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(gl_code: &str) -> GlAccount {
        GlAccount {
            id: 1,
            gl_code: gl_code.to_string(),
            name: "Cash".to_string(),
            account_type: GlAccountType::Asset,
            usage: AccountUsage::Detail,
            disabled: false,
            manual_entries_allowed: true,
            parent_id: None,
        }
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(account("").is_placeholder());
        assert!(!account("110301").is_placeholder());
    }

    #[test]
    fn test_filter_haystack_uses_labels() {
        let haystack = account("110301").filter_haystack();
        assert!(haystack.contains("cash"));
        assert!(haystack.contains("110301"));
        assert!(haystack.contains("asset"));
        assert!(haystack.contains("detail"));
    }

    #[test]
    fn test_deserialize_snapshot_record() {
        let record: GlAccount = serde_json::from_str(
            r#"{
                "id": 7,
                "gl_code": "2001",
                "name": "Accounts Payable",
                "account_type": "liability",
                "usage": "detail",
                "disabled": false,
                "manual_entries_allowed": true,
                "parent_id": 2
            }"#,
        )
        .unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.account_type, GlAccountType::Liability);
        assert_eq!(record.parent_id, Some(2));
    }

    #[test]
    fn test_deserialize_defaults() {
        // upstream omits optional markers for placeholder roots
        let record: GlAccount = serde_json::from_str(
            r#"{"id": 1, "name": "Assets", "account_type": "asset", "usage": "header"}"#,
        )
        .unwrap();
        assert!(record.is_placeholder());
        assert!(record.is_root());
        assert!(!record.disabled);
    }
}
