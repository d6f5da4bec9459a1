//! AiVRIC Checkout Frontend
//!
//! Leptos-based WASM frontend for subscription checkout and billing-portal
//! access. Talks to the Defense API for session creation and hands off to
//! Stripe.js for the hosted checkout redirect.

mod api;
mod app;
mod auth;
mod components;
mod controls;
mod nav;
mod notify;
mod pages;
mod stripe;
mod workflows;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
