//! Account tree construction and the nested tree projection
//!
//! The builder turns one flat snapshot of accounts into a forest keyed by
//! parent/child references. The projection adds expand/collapse state on top
//! of the forest for the nested tree widget.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreResult};
use super::models::GlAccount;

/// A chart-of-accounts node: one account plus its ordered children
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlAccountNode {
    /// The underlying account record
    pub account: GlAccount,
    /// Direct children, in snapshot order; empty for leaves
    pub children: Vec<GlAccountNode>,
}

impl GlAccountNode {
    /// Node identity, derived from the source record
    pub fn id(&self) -> u64 {
        self.account.id
    }

    /// Lazy, restartable iterator over the direct children
    pub fn children(&self) -> std::slice::Iter<'_, GlAccountNode> {
        self.children.iter()
    }

    /// Whether the node has any children
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Build the account forest from a flat snapshot.
///
/// Roots are records without a parent reference. A record whose parent is
/// not part of the snapshot is also treated as a root; upstream data
/// occasionally omits ancestors and the page must still render. A parent
/// chain that loops back on itself is a data error: the whole build fails
/// with [`CoreError::CyclicHierarchy`] and no partial forest is returned.
pub fn build_account_tree(records: &[GlAccount]) -> CoreResult<Vec<GlAccountNode>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let ids: HashSet<u64> = records.iter().map(|r| r.id).collect();

    let mut roots: Vec<&GlAccount> = Vec::new();
    let mut children_of: HashMap<u64, Vec<&GlAccount>> = HashMap::new();

    for record in records {
        match record.parent_id {
            None => roots.push(record),
            Some(parent) if !ids.contains(&parent) => {
                log::warn!(
                    target: "coaview::tree",
                    "account {} references missing parent {}; treating as root",
                    record.id,
                    parent
                );
                roots.push(record);
            }
            Some(parent) => children_of.entry(parent).or_default().push(record),
        }
    }

    let mut placed: HashSet<u64> = HashSet::new();
    let forest: Vec<GlAccountNode> = roots
        .into_iter()
        .map(|root| attach_children(root, &children_of, &mut placed))
        .collect();

    if placed.len() != records.len() {
        // Everything reachable from a root has been placed; the remainder
        // sits on a parent chain that never reaches a root, i.e. a cycle.
        let mut ids: Vec<u64> = records
            .iter()
            .map(|r| r.id)
            .filter(|id| !placed.contains(id))
            .collect();
        ids.sort_unstable();
        return Err(CoreError::CyclicHierarchy { ids });
    }

    Ok(forest)
}

fn attach_children(
    record: &GlAccount,
    children_of: &HashMap<u64, Vec<&GlAccount>>,
    placed: &mut HashSet<u64>,
) -> GlAccountNode {
    placed.insert(record.id);
    let children = children_of
        .get(&record.id)
        .map(|direct| {
            direct
                .iter()
                .map(|child| attach_children(child, children_of, placed))
                .collect()
        })
        .unwrap_or_default();
    GlAccountNode {
        account: record.clone(),
        children,
    }
}

/// Nested tree projection over the account forest
///
/// Owns the forest and the set of expanded node ids. A fresh projection
/// expands the first root so the page opens with something visible.
#[derive(Debug, Default)]
pub struct AccountTreeView {
    roots: Vec<GlAccountNode>,
    expanded: HashSet<u64>,
}

impl AccountTreeView {
    /// Create a projection over a freshly built forest
    pub fn new(roots: Vec<GlAccountNode>) -> Self {
        let mut view = Self {
            roots,
            expanded: HashSet::new(),
        };
        if let Some(first) = view.roots.first() {
            view.expanded.insert(first.id());
        }
        view
    }

    /// The root nodes
    pub fn roots(&self) -> &[GlAccountNode] {
        &self.roots
    }

    /// Direct children of a node; empty for leaves
    pub fn children_of<'a>(&self, node: &'a GlAccountNode) -> std::slice::Iter<'a, GlAccountNode> {
        node.children()
    }

    /// Whether the tree widget should render an expansion toggle
    pub fn has_children(&self, node: &GlAccountNode) -> bool {
        node.has_children()
    }

    pub fn expand(&mut self, id: u64) {
        self.expanded.insert(id);
    }

    pub fn collapse(&mut self, id: u64) {
        self.expanded.remove(&id);
    }

    pub fn toggle(&mut self, id: u64) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: u64) -> bool {
        self.expanded.contains(&id)
    }

    /// Total node count in the forest
    pub fn node_count(&self) -> usize {
        fn count(node: &GlAccountNode) -> usize {
            1 + node.children().map(count).sum::<usize>()
        }
        self.roots.iter().map(count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountUsage, GlAccountType};

    fn record(id: u64, parent_id: Option<u64>, name: &str, gl_code: &str) -> GlAccount {
        GlAccount {
            id,
            gl_code: gl_code.to_string(),
            name: name.to_string(),
            account_type: GlAccountType::Asset,
            usage: if gl_code.is_empty() {
                AccountUsage::Header
            } else {
                AccountUsage::Detail
            },
            disabled: false,
            manual_entries_allowed: true,
            parent_id,
        }
    }

    #[test]
    fn test_empty_snapshot_builds_empty_forest() {
        let forest = build_account_tree(&[]).unwrap();
        assert!(forest.is_empty());
    }

    #[test]
    fn test_forest_shape_and_sibling_order() {
        let records = vec![
            record(1, None, "Assets", ""),
            record(2, Some(1), "Cash", "101"),
            record(3, Some(1), "Bank", "102"),
            record(4, Some(3), "Checking", "10201"),
            record(5, None, "Liabilities", ""),
        ];
        let forest = build_account_tree(&records).unwrap();

        assert_eq!(forest.len(), 2);
        let assets = &forest[0];
        assert_eq!(assets.id(), 1);
        let child_ids: Vec<u64> = assets.children().map(|c| c.id()).collect();
        assert_eq!(child_ids, vec![2, 3]);
        assert_eq!(assets.children[1].children[0].id(), 4);
        assert!(!forest[1].has_children());
    }

    #[test]
    fn test_every_record_appears_exactly_once() {
        let records = vec![
            record(1, None, "Assets", ""),
            record(2, Some(1), "Cash", "101"),
            record(3, Some(2), "Petty Cash", "10101"),
            record(4, Some(1), "Bank", "102"),
        ];
        let forest = build_account_tree(&records).unwrap();
        let view = AccountTreeView::new(forest);
        assert_eq!(view.node_count(), records.len());
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let records = vec![record(1, None, "Assets", ""), record(2, Some(2), "Loop", "900")];
        let err = build_account_tree(&records).unwrap_err();
        match err {
            CoreError::CyclicHierarchy { ids } => assert_eq!(ids, vec![2]),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_two_node_cycle_fails_without_partial_tree() {
        let records = vec![
            record(1, Some(2), "A", "100"),
            record(2, Some(1), "B", "200"),
            record(3, None, "Root", ""),
        ];
        let err = build_account_tree(&records).unwrap_err();
        match err {
            CoreError::CyclicHierarchy { ids } => assert_eq!(ids, vec![1, 2]),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_descendant_of_cycle_is_reported_too() {
        // 4 hangs off the 1<->2 cycle and can never reach a root either
        let records = vec![
            record(1, Some(2), "A", "100"),
            record(2, Some(1), "B", "200"),
            record(4, Some(1), "C", "300"),
        ];
        let err = build_account_tree(&records).unwrap_err();
        match err {
            CoreError::CyclicHierarchy { ids } => assert_eq!(ids, vec![1, 2, 4]),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_dangling_parent_becomes_root() {
        // Upstream sometimes omits ancestors; the orphan is promoted to a
        // root instead of failing the whole page.
        let records = vec![
            record(1, None, "Assets", ""),
            record(2, Some(99), "Orphan", "777"),
        ];
        let forest = build_account_tree(&records).unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[1].id(), 2);
        assert!(!forest[1].has_children());
    }

    #[test]
    fn test_first_root_expanded_by_default() {
        let records = vec![
            record(1, None, "Assets", ""),
            record(2, Some(1), "Cash", "101"),
            record(3, None, "Liabilities", ""),
        ];
        let view = AccountTreeView::new(build_account_tree(&records).unwrap());
        assert!(view.is_expanded(1));
        assert!(!view.is_expanded(2));
        assert!(!view.is_expanded(3));
    }

    #[test]
    fn test_expand_collapse_toggle() {
        let records = vec![record(1, None, "Assets", ""), record(2, Some(1), "Cash", "101")];
        let mut view = AccountTreeView::new(build_account_tree(&records).unwrap());

        view.collapse(1);
        assert!(!view.is_expanded(1));
        view.toggle(1);
        assert!(view.is_expanded(1));
        view.toggle(1);
        assert!(!view.is_expanded(1));
    }

    #[test]
    fn test_children_iterator_is_restartable() {
        let records = vec![
            record(1, None, "Assets", ""),
            record(2, Some(1), "Cash", "101"),
            record(3, Some(1), "Bank", "102"),
        ];
        let view = AccountTreeView::new(build_account_tree(&records).unwrap());
        let root = &view.roots()[0];

        assert_eq!(view.children_of(root).count(), 2);
        // a second traversal starts over
        assert_eq!(view.children_of(root).count(), 2);
        let leaf = &root.children[0];
        assert_eq!(view.children_of(leaf).count(), 0);
        assert!(!view.has_children(leaf));
    }
}
