//! Guided-setup glue for the accounts page
//!
//! When onboarding is active, the page requests contextual popovers as soon
//! as it is visible and hands the user over to the neighboring wizard pages
//! on step changes. The flow only tracks which hints this page owes and
//! which page comes next; everything else belongs to the collaborators.

use std::sync::RwLock;

use coaview_config::OnboardingConfig;

use super::traits::{
    Destination, NavigatorRef, OverlayAnchor, OverlayPresenterRef, PopoverRequest, PopoverSide,
};

/// Hint flags for this page and its neighbors
#[derive(Debug, Clone, Default)]
pub struct OnboardingState {
    /// Popover on the tree view toggle is pending
    pub show_page_hint: bool,
    /// Popover on the accounts table is pending
    pub show_list_hint: bool,
    /// The create-account form should show its hint next
    pub show_create_form_hint: bool,
    /// The accounting overview should show its hint next
    pub show_overview_hint: bool,
}

/// Drives the onboarding hints of the accounts page
pub struct OnboardingFlow {
    state: RwLock<OnboardingState>,
    navigator: NavigatorRef,
    overlay: OverlayPresenterRef,
}

impl OnboardingFlow {
    /// Initialize the flow from configuration
    pub fn new(config: &OnboardingConfig, navigator: NavigatorRef, overlay: OverlayPresenterRef) -> Self {
        let state = OnboardingState {
            show_page_hint: config.enabled && config.show_page_hint,
            show_list_hint: config.enabled && config.show_list_hint,
            ..OnboardingState::default()
        };
        Self {
            state: RwLock::new(state),
            navigator,
            overlay,
        }
    }

    /// Current flags
    pub fn state(&self) -> OnboardingState {
        self.state.read().unwrap().clone()
    }

    /// Request the pending popovers once the page is rendered
    pub fn on_view_ready(&self) {
        let state = self.state.read().unwrap().clone();
        if state.show_page_hint {
            self.overlay.show_popover(PopoverRequest {
                anchor: OverlayAnchor::TreeViewToggle,
                side: PopoverSide::Bottom,
                backdrop: true,
            });
        }
        if state.show_list_hint {
            self.overlay.show_popover(PopoverRequest {
                anchor: OverlayAnchor::AccountsTable,
                side: PopoverSide::Top,
                backdrop: true,
            });
        }
    }

    /// Advance to the create-account step
    pub fn next_step(&self) {
        {
            let mut state = self.state.write().unwrap();
            state.show_page_hint = false;
            state.show_list_hint = false;
            state.show_create_form_hint = true;
        }
        self.navigator.navigate(Destination::CreateGlAccount);
    }

    /// Go back to the accounting overview step
    pub fn previous_step(&self) {
        {
            let mut state = self.state.write().unwrap();
            state.show_page_hint = false;
            state.show_list_hint = false;
            state.show_overview_hint = true;
        }
        self.navigator.navigate(Destination::AccountingOverview);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Navigator, OverlayPresenter};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingNavigator {
        destinations: Mutex<Vec<Destination>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, destination: Destination) {
            self.destinations.lock().unwrap().push(destination);
        }
    }

    #[derive(Default)]
    struct RecordingOverlay {
        requests: Mutex<Vec<PopoverRequest>>,
    }

    impl OverlayPresenter for RecordingOverlay {
        fn show_popover(&self, request: PopoverRequest) {
            self.requests.lock().unwrap().push(request);
        }
    }

    fn flow_with(config: OnboardingConfig) -> (OnboardingFlow, Arc<RecordingNavigator>, Arc<RecordingOverlay>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let overlay = Arc::new(RecordingOverlay::default());
        let flow = OnboardingFlow::new(&config, navigator.clone(), overlay.clone());
        (flow, navigator, overlay)
    }

    #[test]
    fn test_view_ready_requests_both_hints() {
        let (flow, _, overlay) = flow_with(OnboardingConfig {
            enabled: true,
            show_page_hint: true,
            show_list_hint: true,
        });

        flow.on_view_ready();

        let requests = overlay.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].anchor, OverlayAnchor::TreeViewToggle);
        assert_eq!(requests[0].side, PopoverSide::Bottom);
        assert!(requests[0].backdrop);
        assert_eq!(requests[1].anchor, OverlayAnchor::AccountsTable);
        assert_eq!(requests[1].side, PopoverSide::Top);
    }

    #[test]
    fn test_disabled_onboarding_requests_nothing() {
        let (flow, _, overlay) = flow_with(OnboardingConfig {
            enabled: false,
            show_page_hint: true,
            show_list_hint: true,
        });

        flow.on_view_ready();
        assert!(overlay.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_next_step_hands_over_to_create_form() {
        let (flow, navigator, _) = flow_with(OnboardingConfig {
            enabled: true,
            show_page_hint: true,
            show_list_hint: true,
        });

        flow.next_step();

        let state = flow.state();
        assert!(!state.show_page_hint);
        assert!(!state.show_list_hint);
        assert!(state.show_create_form_hint);
        assert_eq!(
            navigator.destinations.lock().unwrap().as_slice(),
            &[Destination::CreateGlAccount]
        );
    }

    #[test]
    fn test_previous_step_returns_to_overview() {
        let (flow, navigator, _) = flow_with(OnboardingConfig {
            enabled: true,
            show_page_hint: true,
            show_list_hint: false,
        });

        flow.previous_step();

        let state = flow.state();
        assert!(!state.show_page_hint);
        assert!(state.show_overview_hint);
        assert_eq!(
            navigator.destinations.lock().unwrap().as_slice(),
            &[Destination::AccountingOverview]
        );
    }
}
