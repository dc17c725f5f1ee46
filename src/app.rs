//! Todo Cards Frontend App
//!
//! Root component: builds the session and navigation contexts, provides the
//! global store, and switches pages on the route signal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{Header, HomePage, LoginPage, RegisterPage, TodosPage};
use crate::context::{AppContext, Route};
use crate::models::User;
use crate::session::SessionContext;
use crate::store::{store_clear_todos, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (route, set_route) = signal(Route::Home);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (is_logged_in, set_is_logged_in) = signal(false);
    let (user, set_user) = signal::<Option<User>>(None);
    let (loading, set_loading) = signal(true);

    // Provide context to all children
    let session = SessionContext::new(
        (is_logged_in, set_is_logged_in),
        (user, set_user),
        (loading, set_loading),
    );
    provide_context(session);
    provide_context(AppContext::new(
        (route, set_route),
        (reload_trigger, set_reload_trigger),
    ));
    let store = Store::new(AppState::new());
    provide_context(store);

    // Resolve any persisted token once at startup
    Effect::new(move |_| {
        spawn_local(session.initialize());
    });

    // Cached cards belong to the session that loaded them. Clearing here
    // covers every path that ends a session: the header's logout button and
    // the forced logout on any unauthorized response.
    Effect::new(move |_| {
        if !is_logged_in.get() {
            store_clear_todos(&store);
        }
    });

    view! {
        <div class="app-layout">
            <Header />

            <main class="page-content">
                {move || match route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Login => view! { <LoginPage /> }.into_any(),
                    Route::Register => view! { <RegisterPage /> }.into_any(),
                    Route::Todos => view! { <TodosPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
