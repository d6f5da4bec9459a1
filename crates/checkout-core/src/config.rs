//! Frontend Configuration
//!
//! Built once at startup from the page origin and passed to everything that
//! needs it; nothing reads ambient globals after construction.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Backend API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://defense-api.aivric.com";

/// Replaced with the real Stripe publishable key during deployment
pub const PUBLISHABLE_KEY_PLACEHOLDER: &str = "%%STRIPE_PUBLISHABLE_KEY%%";

/// Configuration for the checkout frontend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Backend API base URL, no trailing slash
    pub api_base_url: String,

    /// Stripe publishable key (deployment-injected)
    pub publishable_key: String,

    /// Redirect target after a successful checkout
    pub success_url: String,

    /// Redirect target when checkout is cancelled
    pub cancel_url: String,

    /// Login page path, given a `redirect` query parameter on navigation
    pub login_path: String,

    /// Account page path; also the portal return target
    pub account_path: String,
}

impl CheckoutConfig {
    /// Build the configuration for a deployment origin
    /// (e.g. `https://aivric.com`).
    pub fn new(origin: &str) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            publishable_key: PUBLISHABLE_KEY_PLACEHOLDER.into(),
            success_url: format!("{origin}/success"),
            cancel_url: format!("{origin}/pricing"),
            login_path: "/login".into(),
            account_path: "/account".into(),
        }
    }

    /// `POST` endpoint for checkout-session creation
    pub fn checkout_session_url(&self) -> String {
        format!("{}/api/v1/stripe/create-checkout-session", self.api_base_url)
    }

    /// `POST` endpoint for portal-session creation
    pub fn portal_session_url(&self) -> String {
        format!("{}/api/v1/stripe/create-portal-session", self.api_base_url)
    }

    /// `GET` endpoint for subscription status
    pub fn subscription_status_url(&self) -> String {
        format!("{}/api/v1/subscriptions/status", self.api_base_url)
    }

    /// Login URL carrying the path to return to after authentication
    pub fn login_redirect_url(&self, return_path: &str) -> String {
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("redirect", return_path)
            .finish();
        format!("{}?{}", self.login_path, query)
    }
}

/// Whether a location path belongs to the pricing page
pub fn is_pricing_path(path: &str) -> bool {
    path.contains("pricing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_append_to_api_base() {
        let cfg = CheckoutConfig::new("https://aivric.com");
        assert_eq!(
            cfg.checkout_session_url(),
            "https://defense-api.aivric.com/api/v1/stripe/create-checkout-session"
        );
        assert_eq!(
            cfg.portal_session_url(),
            "https://defense-api.aivric.com/api/v1/stripe/create-portal-session"
        );
        assert_eq!(
            cfg.subscription_status_url(),
            "https://defense-api.aivric.com/api/v1/subscriptions/status"
        );
    }

    #[test]
    fn redirect_targets_derive_from_origin() {
        let cfg = CheckoutConfig::new("https://aivric.com");
        assert_eq!(cfg.success_url, "https://aivric.com/success");
        assert_eq!(cfg.cancel_url, "https://aivric.com/pricing");
    }

    #[test]
    fn login_redirect_encodes_return_path() {
        let cfg = CheckoutConfig::new("https://aivric.com");
        assert_eq!(
            cfg.login_redirect_url("/pricing"),
            "/login?redirect=%2Fpricing"
        );
    }

    #[test]
    fn pricing_path_detection() {
        assert!(is_pricing_path("/pricing"));
        assert!(is_pricing_path("/app/pricing/"));
        assert!(!is_pricing_path("/account"));
        assert!(!is_pricing_path("/"));
    }
}
