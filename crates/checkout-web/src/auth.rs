//! Credential Accessor
//!
//! The bearer token is owned by the login flow and stored in `localStorage`;
//! this module only reads it. Absence (or an empty value) means
//! unauthenticated, which is a valid state.

use checkout_core::{CheckoutConfig, CheckoutError};

use crate::nav;

const AUTH_TOKEN_KEY: &str = "auth_token";

/// Read the bearer credential, if present
pub fn credential() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(AUTH_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

/// Read the bearer credential or fail with `AuthRequired`
pub fn require_credential() -> checkout_core::Result<String> {
    credential().ok_or(CheckoutError::AuthRequired)
}

/// Navigate to the login page, carrying the path to return to afterwards
pub fn redirect_to_login(cfg: &CheckoutConfig, return_path: &str) {
    nav::navigate_to(&cfg.login_redirect_url(return_path));
}
