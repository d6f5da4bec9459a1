//! Checkout Success Page

use leptos::prelude::*;

use crate::notify;

#[component]
pub fn SuccessPage() -> impl IntoView {
    notify::show_success("Your subscription is now active.");

    view! {
        <div class="success">
            <h1>"Subscription Active"</h1>
            <p>"Payment completed. Your subscription is now active."</p>
            <div class="cta">
                <a href="/account" class="btn btn-primary">"Go to Account"</a>
                <a href="/pricing" class="btn">"Back to Pricing"</a>
            </div>
        </div>
    }
}
