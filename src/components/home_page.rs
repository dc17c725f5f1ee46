//! Home Page Component
//!
//! Static landing view.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-title">"Todo Card App"</h1>
            <p class="home-tagline">
                "a todo "
                <span class="marker">"card"</span>
                " that helps you "
                <span class="marker emphasis">"focus"</span>
                " one card at a time"
            </p>
            <div class="card-stack">
                <div class="card-ghost tilted"></div>
                <div class="card-ghost"></div>
            </div>
        </div>
    }
}
