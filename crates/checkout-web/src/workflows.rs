//! Redirect Orchestration
//!
//! Both workflows share one linear shape: credential check → backend session
//! request → hand-off. A missing credential navigates to login with the
//! current path as the return target and stops there; the navigation unloads
//! the page, so restoring the control is moot. Any later failure surfaces a
//! notification and restores the triggering control. A successful hand-off
//! navigates away, so the control is deliberately never re-enabled.

use checkout_core::{CheckoutConfig, CheckoutError, CheckoutRequest, PortalRequest, Product};

use crate::controls::ControlHandle;
use crate::{api, auth, nav, notify, stripe};

/// Subscribe to a product via Stripe's hosted checkout
pub async fn subscribe(
    cfg: CheckoutConfig,
    control: ControlHandle,
    product: Product,
    price_id: String,
) {
    let original = control.begin_loading();

    let Ok(credential) = auth::require_credential() else {
        auth::redirect_to_login(&cfg, &nav::current_path());
        return;
    };

    let request = CheckoutRequest {
        price_id,
        product: product.as_str().into(),
        success_url: cfg.success_url.clone(),
        cancel_url: cfg.cancel_url.clone(),
    };

    if let Err(err) = checkout_and_redirect(&cfg, &request, &credential).await {
        fail(&err, &control, original);
    }
}

async fn checkout_and_redirect(
    cfg: &CheckoutConfig,
    request: &CheckoutRequest,
    credential: &str,
) -> Result<(), CheckoutError> {
    let session = api::create_checkout_session(cfg, request, credential).await?;
    stripe::redirect_to_checkout(&cfg.publishable_key, &session.id).await
}

/// Open the customer portal for an existing subscription
pub async fn manage_subscription(cfg: CheckoutConfig, control: ControlHandle) {
    let original = control.begin_loading();

    let Ok(credential) = auth::require_credential() else {
        auth::redirect_to_login(&cfg, &nav::current_path());
        return;
    };

    let request = PortalRequest {
        return_url: format!("{}{}", nav::origin(), cfg.account_path),
    };

    match api::create_portal_session(&cfg, &request, &credential).await {
        Ok(portal) => nav::navigate_to(&portal.url),
        Err(err) => fail(&err, &control, original),
    }
}

fn fail(err: &CheckoutError, control: &ControlHandle, original_label: String) {
    web_sys::console::error_1(&format!("checkout workflow failed: {err}").into());
    notify::show_error(&err.user_message());
    control.restore(original_label);
}
