//! Stripe.js Bindings
//!
//! `wasm-bindgen` externs for the slice of Stripe.js this frontend uses:
//! constructing the client from the publishable key and redirecting to a
//! hosted checkout session. Stripe.js itself is loaded from a `<script>` tag
//! in the host page.

use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use checkout_core::CheckoutError;

const REDIRECT_FALLBACK: &str = "Failed to redirect to checkout";
const INIT_FALLBACK: &str = "Failed to initialize payment system. Please refresh the page.";

// Foreign declarations only; no unsafe Rust is executed here.
#[allow(unsafe_code)]
#[wasm_bindgen]
unsafe extern "C" {
    /// Raw Stripe.js client handle
    #[wasm_bindgen(js_name = Stripe, js_namespace = window)]
    type Stripe;

    /// `Stripe(publishableKey)` constructor
    #[wasm_bindgen(catch, js_name = Stripe, js_namespace = window)]
    fn stripe_new(publishable_key: &str) -> Result<Stripe, JsValue>;

    /// `stripe.redirectToCheckout({ sessionId })` → JS `Promise`
    #[wasm_bindgen(method, catch, js_name = redirectToCheckout)]
    fn redirect_to_checkout_js(this: &Stripe, options: &JsValue) -> Result<Promise, JsValue>;
}

/// Hand a checkout session to Stripe's hosted page.
///
/// On success the browser navigates away and this future never observes a
/// resolution the caller cares about; a resolved value carrying `error`
/// means the redirect could not start.
pub async fn redirect_to_checkout(
    publishable_key: &str,
    session_id: &str,
) -> Result<(), CheckoutError> {
    let stripe = stripe_new(publishable_key)
        .map_err(|e| CheckoutError::ProviderRedirect(js_message(&e, INIT_FALLBACK)))?;

    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("sessionId"),
        &JsValue::from_str(session_id),
    )
    .map_err(|e| CheckoutError::ProviderRedirect(js_message(&e, REDIRECT_FALLBACK)))?;

    let promise = stripe
        .redirect_to_checkout_js(&options.into())
        .map_err(|e| CheckoutError::ProviderRedirect(js_message(&e, REDIRECT_FALLBACK)))?;

    let result = JsFuture::from(promise)
        .await
        .map_err(|e| CheckoutError::ProviderRedirect(js_message(&e, REDIRECT_FALLBACK)))?;

    match Reflect::get(&result, &JsValue::from_str("error")) {
        Ok(error) if !error.is_undefined() && !error.is_null() => Err(
            CheckoutError::ProviderRedirect(js_message(&error, REDIRECT_FALLBACK)),
        ),
        _ => Ok(()),
    }
}

/// Best-effort `message` field of a JS error value
fn js_message(value: &JsValue, fallback: &str) -> String {
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
