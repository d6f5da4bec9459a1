//! Session Request & Response Types
//!
//! Request bodies sent to the backend session endpoints and parsing of their
//! responses. Parsing is pure so the error-extraction rules can be tested
//! without a browser: a non-success response surfaces the body's `error`
//! field, falling back to a per-operation generic message when the body is
//! missing or unparsable.

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};

/// Fallback message when a checkout-session error body is unusable
pub const CHECKOUT_FALLBACK: &str = "Failed to create checkout session";

/// Fallback message when a portal-session error body is unusable
pub const PORTAL_FALLBACK: &str = "Failed to create portal session";

/// Body for `POST /api/v1/stripe/create-checkout-session`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Stripe price ID
    pub price_id: String,

    /// Product wire tag (defense, offense, vision, ...)
    pub product: String,

    /// URL to redirect after successful payment
    pub success_url: String,

    /// URL to redirect if checkout is cancelled
    pub cancel_url: String,
}

/// Body for `POST /api/v1/stripe/create-portal-session`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortalRequest {
    /// URL the portal returns the customer to
    pub return_url: String,
}

/// Successful checkout-session response: the Stripe session ID to hand to
/// `redirectToCheckout`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
}

/// Successful portal-session response: a one-time URL to navigate to
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortalSession {
    pub url: String,
}

/// Interpret a checkout-session response body
pub fn parse_checkout_session(success: bool, body: &str) -> Result<CheckoutSession> {
    if !success {
        return Err(CheckoutError::Backend(error_message(body, CHECKOUT_FALLBACK)));
    }
    serde_json::from_str(body)
        .map_err(|_| CheckoutError::Backend(CHECKOUT_FALLBACK.into()))
}

/// Interpret a portal-session response body
pub fn parse_portal_session(success: bool, body: &str) -> Result<PortalSession> {
    if !success {
        return Err(CheckoutError::Backend(error_message(body, PORTAL_FALLBACK)));
    }
    serde_json::from_str(body)
        .map_err(|_| CheckoutError::Backend(PORTAL_FALLBACK.into()))
}

/// Extract the `error` field from a failure body, or fall back
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_success_yields_session_id() {
        let session = parse_checkout_session(true, r#"{"id": "cs_test_123"}"#).unwrap();
        assert_eq!(session.id, "cs_test_123");
    }

    #[test]
    fn checkout_failure_surfaces_error_field() {
        let err = parse_checkout_session(false, r#"{"error": "Price not found"}"#).unwrap_err();
        assert_eq!(err, CheckoutError::Backend("Price not found".into()));
    }

    #[test]
    fn checkout_failure_with_malformed_body_falls_back() {
        let err = parse_checkout_session(false, "<html>502 Bad Gateway</html>").unwrap_err();
        assert_eq!(err, CheckoutError::Backend(CHECKOUT_FALLBACK.into()));
    }

    #[test]
    fn checkout_failure_with_missing_error_field_falls_back() {
        let err = parse_checkout_session(false, r#"{"detail": "nope"}"#).unwrap_err();
        assert_eq!(err, CheckoutError::Backend(CHECKOUT_FALLBACK.into()));
    }

    #[test]
    fn portal_success_yields_url() {
        let session =
            parse_portal_session(true, r#"{"url": "https://billing.stripe.com/p/session_x"}"#)
                .unwrap();
        assert_eq!(session.url, "https://billing.stripe.com/p/session_x");
    }

    #[test]
    fn portal_failure_surfaces_error_field() {
        let err = parse_portal_session(false, r#"{"error": "No active subscription"}"#).unwrap_err();
        assert_eq!(err, CheckoutError::Backend("No active subscription".into()));
    }

    #[test]
    fn portal_failure_with_empty_body_falls_back() {
        let err = parse_portal_session(false, "").unwrap_err();
        assert_eq!(err, CheckoutError::Backend(PORTAL_FALLBACK.into()));
    }

    #[test]
    fn checkout_request_serializes_snake_case_fields() {
        let request = CheckoutRequest {
            price_id: "price_123".into(),
            product: "defense".into(),
            success_url: "https://aivric.com/success".into(),
            cancel_url: "https://aivric.com/pricing".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["price_id"], "price_123");
        assert_eq!(json["product"], "defense");
        assert_eq!(json["success_url"], "https://aivric.com/success");
        assert_eq!(json["cancel_url"], "https://aivric.com/pricing");
    }
}
