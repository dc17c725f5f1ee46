//! Header Component
//!
//! Brand plus session-aware navigation.

use leptos::prelude::*;

use crate::context::{AppContext, Route};
use crate::session::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let logout = move |_| {
        session.logout();
        ctx.navigate(Route::Home);
    };

    view! {
        <header class="app-header">
            <button class="brand" on:click=move |_| ctx.navigate(Route::Home)>
                <h1>"Todo"<br/>"Cards"</h1>
            </button>
            <nav class="header-nav">
                <Show
                    when=move || session.is_logged_in.get()
                    fallback=move || view! {
                        <button class="nav-link" on:click=move |_| ctx.navigate(Route::Login)>"Sign In"</button>
                        <span class="nav-separator">"/"</span>
                        <button class="nav-link" on:click=move |_| ctx.navigate(Route::Register)>"Sign Up"</button>
                    }
                >
                    <button class="nav-link" on:click=logout>"Logout"</button>
                </Show>
            </nav>
        </header>
    }
}
