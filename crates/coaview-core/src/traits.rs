//! Capability traits for the external collaborators
//!
//! The presenter never talks to transport, routing, or overlay machinery
//! directly. Each collaborator is a constructor-injected trait object, so
//! tests substitute doubles.

use async_trait::async_trait;
use std::sync::Arc;

use super::error::SnapshotError;
use super::models::GlAccount;

// ==================== Snapshot Provider ====================

/// Snapshot provider reference type
pub type SnapshotProviderRef = Arc<dyn SnapshotProvider>;

/// Supplies the chart of accounts, already resolved and deserialized.
///
/// One call per view activation; the delivered sequence is complete or the
/// call fails. Partial snapshots never reach the presenter.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Fetch the full flat chart of accounts
    async fn chart_of_accounts(&self) -> Result<Vec<GlAccount>, SnapshotError>;
}

// ==================== Navigation ====================

/// Navigator reference type
pub type NavigatorRef = Arc<dyn Navigator>;

/// Logical destinations the accounts page can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The accounting overview page
    AccountingOverview,
    /// The create-GL-account flow
    CreateGlAccount,
}

/// Requests a transition of the surrounding application.
///
/// Success or failure of the transition is not observed here.
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: Destination);
}

// ==================== Onboarding Overlay ====================

/// Overlay presenter reference type
pub type OverlayPresenterRef = Arc<dyn OverlayPresenter>;

/// Anchors the accounts page can attach a popover to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAnchor {
    /// The list/tree view toggle button
    TreeViewToggle,
    /// The accounts table
    AccountsTable,
}

/// Preferred popover side relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// One contextual-help request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopoverRequest {
    pub anchor: OverlayAnchor,
    pub side: PopoverSide,
    pub backdrop: bool,
}

/// Renders contextual help popovers. Purely advisory; no return value.
pub trait OverlayPresenter: Send + Sync {
    fn show_popover(&self, request: PopoverRequest);
}
