//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use checkout_core::CheckoutConfig;

use crate::nav;
use crate::pages::{AccountPage, HomePage, PricingPage, SuccessPage};

/// Keyframes for notification slide-in/out plus the already-active button
/// styling applied by status sync.
const CHECKOUT_CSS: &str = "\
@keyframes slideIn { from { transform: translateX(100%); opacity: 0; } \
to { transform: translateX(0); opacity: 1; } } \
@keyframes slideOut { from { transform: translateX(0); opacity: 1; } \
to { transform: translateX(100%); opacity: 0; } } \
.subscription-active { background-color: #6c757d !important; cursor: not-allowed !important; }";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // One configuration value for the whole page view, built from the origin
    // at startup; the publishable-key placeholder is replaced at deployment.
    provide_context(CheckoutConfig::new(&nav::origin()));

    view! {
        <style>{CHECKOUT_CSS}</style>
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/pricing") view=PricingPage />
                    <Route path=path!("/account") view=AccountPage />
                    <Route path=path!("/success") view=SuccessPage />
                </Routes>
            </main>
        </Router>
    }
}
