//! Todo Grid Component
//!
//! Owns the task list lifecycle: fetch + reload, the load error banner, the
//! card timers, and which card is in edit mode.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::TodoCard;
use crate::context::{AppContext, Route};
use crate::session::use_session;
use crate::store::{store_set_todos, use_app_store, AppStateStoreFields};
use crate::timers::CardTimers;

#[component]
pub fn TodoGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let editing_id = RwSignal::new(None::<String>);
    let timers = CardTimers::new();

    // Load on mount and whenever something fires the reload trigger
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        web_sys::console::log_1(&format!("[TODOS] Loading todos, trigger={}", trigger).into());
        set_loading.set(true);
        // Card identity can change wholesale across a reload, so running
        // stopwatches must not carry over.
        timers.reset();
        spawn_local(async move {
            match api::list_todos().await {
                Ok(todos) => {
                    web_sys::console::log_1(&format!("[TODOS] Loaded {} todos", todos.len()).into());
                    let _ = set_error.try_set(None);
                    store_set_todos(&store, todos);
                }
                Err(err) if err.is_unauthorized() => {
                    web_sys::console::error_1(&format!("[TODOS] unauthorized: {err}").into());
                    session.logout();
                    ctx.navigate(Route::Login);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[TODOS] load failed: {err}").into());
                    // Keep whatever list is already showing; the banner is
                    // enough to say the refresh failed.
                    let _ = set_error.try_set(Some(format!("Error fetching todos: {err}")));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    // No tick may outlive the grid
    on_cleanup(move || timers.clear_all());

    view! {
        <div class="todo-section">
            {move || error.get().map(|message| view! {
                <div class="error-banner">
                    <span>{message}</span>
                    <button class="retry-btn" on:click=move |_| ctx.reload()>"Retry"</button>
                </div>
            })}

            {move || {
                let is_empty = store.todos().with(|todos| todos.is_empty());
                if loading.get() && is_empty {
                    view! { <div class="grid-loading">"Loading todos..."</div> }.into_any()
                } else if is_empty && error.with(|e| e.is_none()) {
                    view! { <div class="grid-empty">"No todos found. Create your first one!"</div> }.into_any()
                } else {
                    view! {
                        <div class="todo-grid">
                            <For
                                each=move || store.todos().get()
                                key=|todo| {
                                    // Use a tuple of all mutable fields to ensure changes cause re-render
                                    (
                                        todo.id.clone(),
                                        todo.title.clone(),
                                        todo.description.clone(),
                                        todo.priority,
                                        todo.status,
                                        todo.completed,
                                    )
                                }
                                children=move |todo| {
                                    view! { <TodoCard todo=todo timers=timers editing_id=editing_id /> }
                                }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
