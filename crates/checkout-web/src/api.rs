//! API Client
//!
//! Single-attempt authenticated requests against the Defense API. Response
//! interpretation lives in `checkout-core` so the error-extraction rules are
//! covered by native tests.

use checkout_core::{
    session, CheckoutConfig, CheckoutError, CheckoutRequest, CheckoutSession, PortalRequest,
    PortalSession, Result, SubscriptionStatus,
};

use crate::auth;

/// Create a hosted checkout session for a product
pub async fn create_checkout_session(
    cfg: &CheckoutConfig,
    request: &CheckoutRequest,
    credential: &str,
) -> Result<CheckoutSession> {
    let client = reqwest::Client::new();

    let response = client
        .post(cfg.checkout_session_url())
        .bearer_auth(credential)
        .json(request)
        .send()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))?;

    let success = response.status().is_success();
    let body = response
        .text()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))?;

    session::parse_checkout_session(success, &body)
}

/// Create a customer-portal session
pub async fn create_portal_session(
    cfg: &CheckoutConfig,
    request: &PortalRequest,
    credential: &str,
) -> Result<PortalSession> {
    let client = reqwest::Client::new();

    let response = client
        .post(cfg.portal_session_url())
        .bearer_auth(credential)
        .json(request)
        .send()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))?;

    let success = response.status().is_success();
    let body = response
        .text()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))?;

    session::parse_portal_session(success, &body)
}

/// Fetch the current subscription status.
///
/// Never fails: a missing credential, transport error, or non-success
/// response all degrade to the default status. The default is "no entitlement
/// known", not a confirmed non-subscription.
pub async fn fetch_subscription_status(cfg: &CheckoutConfig) -> SubscriptionStatus {
    let Some(credential) = auth::credential() else {
        return SubscriptionStatus::default();
    };

    match try_fetch_status(cfg, &credential).await {
        Ok(status) => status,
        Err(err) => {
            web_sys::console::warn_1(&format!("subscription status unavailable: {err}").into());
            SubscriptionStatus::default()
        }
    }
}

async fn try_fetch_status(cfg: &CheckoutConfig, credential: &str) -> Result<SubscriptionStatus> {
    let client = reqwest::Client::new();

    let response = client
        .get(cfg.subscription_status_url())
        .bearer_auth(credential)
        .send()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(CheckoutError::Backend(format!(
            "status endpoint returned {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))
}
