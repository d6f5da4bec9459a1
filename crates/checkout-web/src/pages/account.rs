//! Account Page

use leptos::prelude::*;

use crate::components::PortalButton;

#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <div class="account">
            <h1>"Account"</h1>
            <p>
                "Update payment methods, switch plans, or cancel through the "
                "customer portal."
            </p>
            <PortalButton label="Manage Subscription" />
        </div>
    }
}
