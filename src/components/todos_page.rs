//! Todos Page Component
//!
//! Session-gated welcome screen: greeting, uncompleted-card count, the card
//! grid, and the floating create button with its modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CreateTodoModal, TodoGrid};
use crate::context::{AppContext, Route};
use crate::session::use_session;
use crate::store::{uncompleted_count, use_app_store, AppStateStoreFields};

#[component]
pub fn TodosPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let store = use_app_store();

    let (modal_open, set_modal_open) = signal(false);

    // Not signed in: back to the login form (once the token check settled).
    Effect::new(move |_| {
        let loading = session.loading.get();
        let logged_in = session.is_logged_in.get();
        if should_redirect_to_login(loading, logged_in, ctx.route.get_untracked()) {
            ctx.navigate(Route::Login);
        }
    });

    // The login response's profile can be partial; refetch once when the
    // first name is missing so the greeting has something to show.
    let profile_requested = StoredValue::new(false);
    Effect::new(move |_| {
        if session.loading.get() || !session.is_logged_in.get() {
            return;
        }
        let needs_profile = session.user.with(|user| {
            user.as_ref()
                .map(|u| u.first_name.as_deref().unwrap_or("").is_empty())
                .unwrap_or(true)
        });
        if needs_profile && !profile_requested.get_value() {
            profile_requested.set_value(true);
            spawn_local(async move {
                match api::fetch_profile().await {
                    Ok(user) => session.update_profile(user),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[TODOS] profile refresh failed: {err}").into(),
                        );
                    }
                }
            });
        }
    });

    let greeting = move || {
        session.user.with(|user| {
            let name = user
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_else(|| "User".to_string());
            format!("Hi, {name}")
        })
    };

    let card_counts = move || {
        store.todos().with(|todos| {
            format!(
                "You have {}/{} uncompleted cards",
                uncompleted_count(todos),
                todos.len()
            )
        })
    };

    view! {
        <Show
            when=move || !session.loading.get()
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            <div class="todos-page">
                <header class="todos-header">
                    <div class="user-info">
                        <h1 class="greeting">{greeting}</h1>
                        <p class="card-count">{card_counts}</p>
                    </div>
                    <button class="reports-btn">"Task Reports"</button>
                </header>

                <main class="todos-main">
                    <TodoGrid />
                </main>

                // Floating create button
                <div class="create-fab">
                    <button
                        class="fab-btn"
                        aria-label="Create new task"
                        on:click=move |_| set_modal_open.set(true)
                    >
                        "+"
                    </button>
                    <span class="fab-caption">"create task"</span>
                </div>

                <CreateTodoModal open=modal_open set_open=set_modal_open />
            </div>
        </Show>
    }
}

// Only bounce while this page is still the active route. The header's logout
// handler navigates Home, and that choice must not be overridden by a redirect
// racing it.
fn should_redirect_to_login(loading: bool, logged_in: bool, route: Route) -> bool {
    !loading && !logged_in && route == Route::Todos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_waits_for_token_check() {
        assert!(!should_redirect_to_login(true, false, Route::Todos));
        assert!(should_redirect_to_login(false, false, Route::Todos));
    }

    #[test]
    fn test_redirect_yields_once_route_moved_on() {
        assert!(!should_redirect_to_login(false, false, Route::Home));
        assert!(!should_redirect_to_login(false, false, Route::Login));
        assert!(!should_redirect_to_login(false, true, Route::Todos));
    }
}
