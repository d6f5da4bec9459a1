//! Pricing Page

use leptos::prelude::*;

use checkout_core::{config::is_pricing_path, CheckoutConfig, Product, SubscriptionStatus};

use crate::components::SubscribeButton;
use crate::{api, nav};

#[component]
pub fn PricingPage() -> impl IntoView {
    let cfg = expect_context::<CheckoutConfig>();
    let (status, set_status) = signal(SubscriptionStatus::default());

    // One status fetch at page-ready, pricing page only. Failures degrade to
    // the default status and the buttons stay untouched.
    if is_pricing_path(&nav::current_path()) {
        let cfg = cfg.clone();
        leptos::task::spawn_local(async move {
            set_status.set(api::fetch_subscription_status(&cfg).await);
        });
    }

    view! {
        <div class="pricing">
            <h1>"Pricing"</h1>
            <p class="subtitle">"Subscriptions for every mission profile"</p>

            <div class="plans">
                <div class="plan">
                    <h2>{Product::Defense.display_name()}</h2>
                    <div class="price">"$49"<span>"/month"</span></div>
                    <ul>
                        <li>"Threat monitoring"</li>
                        <li>"Automated hardening"</li>
                    </ul>
                    <SubscribeButton
                        product=Product::Defense
                        price_id=Product::Defense.price_id()
                        label="Subscribe"
                        status=status
                    />
                </div>

                <div class="plan">
                    <h2>{Product::Offense.display_name()}</h2>
                    <div class="price">"$79"<span>"/month"</span></div>
                    <ul>
                        <li>"Attack-surface probing"</li>
                        <li>"Exploit simulation"</li>
                    </ul>
                    <SubscribeButton
                        product=Product::Offense
                        price_id=Product::Offense.price_id()
                        label="Subscribe"
                        status=status
                    />
                </div>

                <div class="plan">
                    <h2>{Product::Vision.display_name()}</h2>
                    <div class="price">"$59"<span>"/month"</span></div>
                    <ul>
                        <li>"Fleet visibility"</li>
                        <li>"Anomaly dashboards"</li>
                    </ul>
                    <SubscribeButton
                        product=Product::Vision
                        price_id=Product::Vision.price_id()
                        label="Subscribe"
                        status=status
                    />
                </div>

                <div class="plan featured">
                    <span class="badge">"Popular"</span>
                    <h2>{Product::BundleDefenseOffense.display_name()}</h2>
                    <div class="price">"$109"<span>"/month"</span></div>
                    <ul>
                        <li>"Defense + Offense"</li>
                        <li>"Priority support"</li>
                    </ul>
                    <SubscribeButton
                        product=Product::BundleDefenseOffense
                        price_id=Product::BundleDefenseOffense.price_id()
                        label="Subscribe"
                        status=status
                    />
                </div>

                <div class="plan">
                    <h2>{Product::BundleAll.display_name()}</h2>
                    <div class="price">"$159"<span>"/month"</span></div>
                    <ul>
                        <li>"All three products"</li>
                        <li>"Priority support"</li>
                    </ul>
                    <SubscribeButton
                        product=Product::BundleAll
                        price_id=Product::BundleAll.price_id()
                        label="Subscribe"
                        status=status
                    />
                </div>
            </div>
        </div>
    }
}
