//! Control Handle
//!
//! Reactive state of the triggering control. Workflows receive the handle as
//! an explicit parameter, never by reading the event target, so each
//! invocation can only disable and restore its own control.

use leptos::prelude::*;

/// Label shown while a workflow is in flight
pub const LOADING_LABEL: &str = "Loading...";

/// Handle to a button's label and busy state
#[derive(Clone, Copy)]
pub struct ControlHandle {
    label: RwSignal<String>,
    busy: RwSignal<bool>,
}

impl ControlHandle {
    pub fn new(initial_label: &str) -> Self {
        Self {
            label: RwSignal::new(initial_label.to_string()),
            busy: RwSignal::new(false),
        }
    }

    /// Disable the control and show the loading label; returns the prior
    /// label for restoration on failure.
    pub fn begin_loading(&self) -> String {
        let original = self.label.get_untracked();
        self.label.set(LOADING_LABEL.into());
        self.busy.set(true);
        original
    }

    /// Re-enable the control with its original label
    pub fn restore(&self, original_label: String) {
        self.label.set(original_label);
        self.busy.set(false);
    }

    /// Current label (reactive)
    pub fn label_text(&self) -> String {
        self.label.get()
    }

    /// Whether a workflow is in flight (reactive)
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Non-reactive busy check for event handlers
    pub fn is_busy_untracked(&self) -> bool {
        self.busy.get_untracked()
    }
}
