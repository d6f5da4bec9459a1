//! Subscription Status & Control State
//!
//! The status endpoint reports per-product entitlement flags plus the raw
//! subscription records. The pricing page maps entitlements onto its
//! subscribe buttons through `subscribe_control_state`, a pure function of
//! the status, so repeated application cannot drift the UI.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Label shown on a subscribe control for an already-entitled product
pub const ACTIVE_LABEL: &str = "Active Subscription";

/// Response of `GET /api/v1/subscriptions/status`.
///
/// The default value (all flags false, no subscriptions) doubles as the
/// soft-fail result when the fetch cannot complete; it means "no entitlement
/// known", not a confirmed non-subscription.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    #[serde(default)]
    pub has_defense: bool,

    #[serde(default)]
    pub has_offense: bool,

    #[serde(default)]
    pub has_vision: bool,

    /// Raw subscription records; opaque to the frontend
    #[serde(default)]
    pub subscriptions: Vec<serde_json::Value>,
}

impl SubscriptionStatus {
    /// Whether the user is entitled to the given product.
    ///
    /// Bundles carry no entitlement flag of their own; their controls are
    /// left untouched by status sync.
    pub fn has_product(&self, product: Product) -> bool {
        match product {
            Product::Defense => self.has_defense,
            Product::Offense => self.has_offense,
            Product::Vision => self.has_vision,
            Product::BundleDefenseOffense | Product::BundleAll => false,
        }
    }
}

/// Visual state of an interactive control
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlState {
    pub label: String,
    pub disabled: bool,
    /// Styled as an already-active subscription
    pub active: bool,
}

/// Compute the state of a subscribe control for a product under a status.
///
/// Pure in its inputs: applying the same status twice yields the same state.
pub fn subscribe_control_state(
    status: &SubscriptionStatus,
    product: Product,
    default_label: &str,
) -> ControlState {
    if status.has_product(product) {
        ControlState {
            label: ACTIVE_LABEL.into(),
            disabled: true,
            active: true,
        }
    } else {
        ControlState {
            label: default_label.into(),
            disabled: false,
            active: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_has_no_entitlements() {
        let status = SubscriptionStatus::default();
        assert!(!status.has_defense);
        assert!(!status.has_offense);
        assert!(!status.has_vision);
        assert!(status.subscriptions.is_empty());
    }

    #[test]
    fn partial_body_deserializes_with_defaults() {
        let status: SubscriptionStatus = serde_json::from_str(r#"{"has_offense": true}"#).unwrap();
        assert!(status.has_offense);
        assert!(!status.has_defense);
        assert!(status.subscriptions.is_empty());
    }

    #[test]
    fn entitled_product_disables_control_with_active_label() {
        let status = SubscriptionStatus {
            has_offense: true,
            ..Default::default()
        };
        let state = subscribe_control_state(&status, Product::Offense, "Subscribe");
        assert_eq!(state.label, ACTIVE_LABEL);
        assert!(state.disabled);
        assert!(state.active);
    }

    #[test]
    fn unentitled_product_is_untouched() {
        let status = SubscriptionStatus {
            has_offense: true,
            ..Default::default()
        };
        let state = subscribe_control_state(&status, Product::Vision, "Subscribe");
        assert_eq!(state.label, "Subscribe");
        assert!(!state.disabled);
        assert!(!state.active);
    }

    #[test]
    fn bundle_controls_are_never_marked_active() {
        let status = SubscriptionStatus {
            has_defense: true,
            has_offense: true,
            has_vision: true,
            subscriptions: vec![],
        };
        let state = subscribe_control_state(&status, Product::BundleAll, "Subscribe");
        assert!(!state.disabled);
    }

    #[test]
    fn control_state_application_is_idempotent() {
        let status = SubscriptionStatus {
            has_defense: true,
            ..Default::default()
        };
        let once = subscribe_control_state(&status, Product::Defense, "Subscribe");
        // Re-applying with the already-updated label must not change anything.
        let twice = subscribe_control_state(&status, Product::Defense, &once.label);
        assert_eq!(once, twice);
    }
}
