//! UI Components

use leptos::prelude::*;

use checkout_core::{status::subscribe_control_state, CheckoutConfig, Product, SubscriptionStatus};

use crate::controls::ControlHandle;
use crate::workflows;

/// Subscribe button for one product.
///
/// Carries its price ID and product tag as props; the triggering control's
/// handle is passed into the workflow explicitly. Entitlement state from the
/// status signal wins over the workflow's own label.
#[component]
pub fn SubscribeButton(
    product: Product,
    #[prop(into)] price_id: String,
    #[prop(into)] label: String,
    #[prop(into)] status: Signal<SubscriptionStatus>,
) -> impl IntoView {
    let cfg = expect_context::<CheckoutConfig>();
    let control = ControlHandle::new(&label);

    let state = Memo::new(move |_| subscribe_control_state(&status.get(), product, ""));
    let entitled = move || state.get().active;

    let text = move || {
        if entitled() {
            state.get().label
        } else {
            control.label_text()
        }
    };
    let disabled = move || entitled() || control.is_busy();
    let class = move || {
        if entitled() {
            "btn subscription-active"
        } else {
            "btn btn-primary"
        }
    };

    let on_click = move |_| {
        if state.get_untracked().active || control.is_busy_untracked() {
            return;
        }
        leptos::task::spawn_local(workflows::subscribe(
            cfg.clone(),
            control,
            product,
            price_id.clone(),
        ));
    };

    view! {
        <button class=class disabled=disabled on:click=on_click>
            {text}
        </button>
    }
}

/// Button opening the Stripe customer portal
#[component]
pub fn PortalButton(#[prop(into)] label: String) -> impl IntoView {
    let cfg = expect_context::<CheckoutConfig>();
    let control = ControlHandle::new(&label);

    let on_click = move |_| {
        if control.is_busy_untracked() {
            return;
        }
        leptos::task::spawn_local(workflows::manage_subscription(cfg.clone(), control));
    };

    view! {
        <button class="btn" disabled=move || control.is_busy() on:click=on_click>
            {move || control.label_text()}
        </button>
    }
}
