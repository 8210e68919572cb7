//! Chart of accounts presentation core
//!
//! Turns one flat snapshot of general-ledger accounts into two synchronized
//! projections: a filterable/sortable table and a nested tree, both
//! addressable by account id. Data arrival, navigation, and overlay
//! rendering are delegated to injected collaborators.

pub mod error;
pub mod models;
pub mod onboarding;
pub mod table;
pub mod traits;
pub mod tree;
pub mod types;

use std::sync::RwLock;

pub use coaview_config::{Config, ViewMode};

pub use error::{
    CoreError, CoreResult, DefaultErrorLogger, ErrorCode, ErrorDetails, ErrorLogger,
    ErrorSeverity, SnapshotError,
};
pub use models::GlAccount;
pub use onboarding::OnboardingFlow;
pub use table::{AccountTable, SortColumn, SortDirection};
pub use traits::{
    Destination, Navigator, NavigatorRef, OverlayAnchor, OverlayPresenter, OverlayPresenterRef,
    PopoverRequest, PopoverSide, SnapshotProvider, SnapshotProviderRef,
};
pub use tree::{build_account_tree, AccountTreeView, GlAccountNode};
pub use types::{AccountUsage, GlAccountType};

/// Callback invoked after each snapshot load with the freshly built forest
pub type TreeListener = Box<dyn Fn(&[GlAccountNode]) + Send + Sync>;

/// In-memory presenter state, replaced wholesale on each load
#[derive(Default)]
struct PresenterState {
    loaded: bool,
    records: Vec<GlAccount>,
    table: AccountTable,
    tree: AccountTreeView,
    selected: Option<GlAccount>,
    view_mode: ViewMode,
}

/// Chart of accounts presenter
///
/// Owns the snapshot and both projections. All mutations are discrete,
/// synchronous steps driven by the surrounding event loop; the only await
/// point is the snapshot fetch itself.
pub struct ChartOfAccounts {
    config: Config,
    provider: SnapshotProviderRef,
    state: RwLock<PresenterState>,
    listeners: RwLock<Vec<TreeListener>>,
}

impl ChartOfAccounts {
    /// Create a presenter with config and snapshot provider
    pub fn new(config: Config, provider: SnapshotProviderRef) -> Self {
        let state = PresenterState {
            view_mode: config.display.default_view,
            ..PresenterState::default()
        };
        Self {
            config,
            provider,
            state: RwLock::new(state),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Register a callback for the per-load tree publication
    pub fn on_snapshot_loaded(&self, listener: impl Fn(&[GlAccountNode]) + Send + Sync + 'static) {
        self.listeners.write().unwrap().push(Box::new(listener));
    }

    /// Load a fresh snapshot and rebuild both projections.
    ///
    /// The previous projections and selection are discarded either way. When
    /// the tree cannot be built the flat table stays populated from the new
    /// snapshot and the error is propagated; no tree is published.
    pub async fn load(&self) -> CoreResult<()> {
        let records = self.provider.chart_of_accounts().await?;
        log::info!(
            target: "coaview::presenter",
            "loaded chart of accounts snapshot with {} records",
            records.len()
        );

        let tree_result = tree::build_account_tree(&records);

        let roots = {
            let mut state = self.state.write().unwrap();
            state.table =
                AccountTable::new(records.clone(), self.config.pagination.records_per_page);
            state.records = records;
            state.selected = None;
            state.loaded = true;
            match tree_result {
                Ok(roots) => {
                    state.tree = AccountTreeView::new(roots.clone());
                    roots
                }
                Err(e) => {
                    state.tree = AccountTreeView::default();
                    DefaultErrorLogger.log_error(&e, "load");
                    return Err(e);
                }
            }
        };

        let listeners = self.listeners.read().unwrap();
        for listener in listeners.iter() {
            listener(&roots);
        }
        Ok(())
    }

    /// Reload from the provider, discarding the current projections
    pub async fn reload(&self) -> CoreResult<()> {
        if !self.state.read().unwrap().loaded {
            return Err(CoreError::NotLoaded);
        }
        self.load().await
    }

    // ==================== Flat Table Projection ====================

    /// All accounts of the current snapshot
    pub fn accounts(&self) -> Vec<GlAccount> {
        self.state.read().unwrap().records.clone()
    }

    /// Look up one account by id
    pub fn account(&self, id: u64) -> CoreResult<GlAccount> {
        self.state
            .read()
            .unwrap()
            .records
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(CoreError::AccountNotFound { id })
    }

    /// Look up one account by GL code
    pub fn account_by_code(&self, gl_code: &str) -> Option<GlAccount> {
        self.state
            .read()
            .unwrap()
            .records
            .iter()
            .find(|a| a.gl_code == gl_code)
            .cloned()
    }

    /// Filter the table rows; the empty string clears the filter
    pub fn apply_filter(&self, filter_value: &str) {
        self.state.write().unwrap().table.set_filter(filter_value);
    }

    /// Table rows passing the current filter
    pub fn visible_accounts(&self) -> Vec<GlAccount> {
        let state = self.state.read().unwrap();
        state.table.visible_rows().into_iter().cloned().collect()
    }

    /// Visible table rows ordered by a column
    pub fn sorted_accounts(&self, column: SortColumn, direction: SortDirection) -> Vec<GlAccount> {
        let state = self.state.read().unwrap();
        state
            .table
            .sorted_rows(column, direction)
            .into_iter()
            .cloned()
            .collect()
    }

    /// One page of the visible table rows
    pub fn page(&self, offset: usize, limit: usize) -> Vec<GlAccount> {
        let state = self.state.read().unwrap();
        state.table.page(offset, limit).into_iter().cloned().collect()
    }

    /// Configured page size for the table
    pub fn page_size(&self) -> usize {
        self.config.pagination.records_per_page
    }

    // ==================== Nested Tree Projection ====================

    /// Root nodes of the current forest; empty until a snapshot is loaded
    pub fn tree_roots(&self) -> Vec<GlAccountNode> {
        self.state.read().unwrap().tree.roots().to_vec()
    }

    pub fn expand_node(&self, id: u64) {
        self.state.write().unwrap().tree.expand(id);
    }

    pub fn collapse_node(&self, id: u64) {
        self.state.write().unwrap().tree.collapse(id);
    }

    pub fn toggle_node(&self, id: u64) {
        self.state.write().unwrap().tree.toggle(id);
    }

    pub fn is_expanded(&self, id: u64) -> bool {
        self.state.read().unwrap().tree.is_expanded(id)
    }

    // ==================== Selection State ====================

    /// View an account node.
    ///
    /// Nodes without a GL code are structural headers that cannot be opened
    /// for detail viewing; activating one clears the selection instead.
    pub fn view_account(&self, node: &GlAccountNode) {
        let mut state = self.state.write().unwrap();
        if node.account.is_placeholder() {
            state.selected = None;
        } else {
            state.selected = Some(node.account.clone());
        }
    }

    /// The currently selected account, if any
    pub fn selected_account(&self) -> Option<GlAccount> {
        self.state.read().unwrap().selected.clone()
    }

    // ==================== View Mode ====================

    /// The active view (list or tree)
    pub fn view_mode(&self) -> ViewMode {
        self.state.read().unwrap().view_mode
    }

    /// Switch between the list and tree views
    pub fn set_view_mode(&self, mode: ViewMode) {
        self.state.write().unwrap().view_mode = mode;
    }
}
