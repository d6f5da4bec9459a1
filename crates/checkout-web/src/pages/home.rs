//! Home Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"AiVRIC"</h1>
                <p class="tagline">"Defense, offense, and vision for your fleet"</p>
                <div class="cta">
                    <a href="/pricing" class="btn btn-primary">"View Plans"</a>
                    <a href="/account" class="btn">"Account"</a>
                </div>
            </header>
        </div>
    }
}
