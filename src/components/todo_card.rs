//! Todo Card Component
//!
//! One task card: view mode with timer, priority, and status-cycle controls,
//! plus an inline edit mode. The grid's `editing_id` signal keeps at most one
//! card in edit mode at a time. Every mutation is pessimistic: local state
//! changes only after the API acknowledged the request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, UpdateTodoPayload};
use crate::context::{AppContext, Route};
use crate::models::{Priority, Status, Todo, TodoDraft};
use crate::session::use_session;
use crate::store::{store_merge_draft, store_remove_todo, store_set_status, use_app_store};
use crate::timers::{format_elapsed, CardTimers};

/// Color dot class for a priority level
fn priority_dot_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "priority-dot high",
        Priority::Medium => "priority-dot medium",
        Priority::Low => "priority-dot low",
    }
}

#[component]
pub fn TodoCard(
    todo: Todo,
    timers: CardTimers,
    editing_id: RwSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let store = use_app_store();

    let Todo {
        id,
        title,
        description,
        priority,
        status,
        ..
    } = todo;
    // Stored so the many handlers below stay `Copy`
    let id = StoredValue::new(id);
    let title = StoredValue::new(title);
    let description = StoredValue::new(description);

    let (action_error, set_action_error) = signal::<Option<String>>(None);
    // At most one mutation in flight per card; the status pill, Save, and
    // Delete are disabled while one is outstanding
    let (busy, set_busy) = signal(false);

    // Edit draft, seeded when this card enters edit mode
    let (draft_title, set_draft_title) = signal(String::new());
    let (draft_description, set_draft_description) = signal(String::new());
    let (draft_priority, set_draft_priority) = signal(priority);
    let (draft_status, set_draft_status) = signal(status);

    let is_editing = move || {
        editing_id.with(|editing| id.with_value(|id| editing.as_deref() == Some(id.as_str())))
    };

    // Timer controls
    let on_toggle_timer = move |_| id.with_value(|id| timers.toggle(id));
    let elapsed_label = move || format_elapsed(id.with_value(|id| timers.elapsed(id)));
    let timer_running = move || id.with_value(|id| timers.is_active(id));

    // Status pill advances pending → in-progress → completed → pending
    let on_cycle_status = move |_| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        let id = id.get_value();
        let next = status.cycle();
        spawn_local(async move {
            match api::update_todo(&id, &UpdateTodoPayload::status_change(next)).await {
                Ok(()) => store_set_status(&store, &id, next),
                Err(err) if err.is_unauthorized() => {
                    session.logout();
                    ctx.navigate(Route::Login);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[CARD] status update failed: {err}").into());
                    let _ = set_action_error.try_set(Some(format!("Error updating todo: {err}")));
                }
            }
            let _ = set_busy.try_set(false);
        });
    };

    // Enter edit mode with a fresh draft of the current fields
    let on_edit = move |_| {
        set_draft_title.set(title.get_value());
        set_draft_description.set(description.get_value());
        set_draft_priority.set(priority);
        set_draft_status.set(status);
        set_action_error.set(None);
        editing_id.set(Some(id.get_value()));
    };

    let on_cancel_edit = move |_| editing_id.set(None);

    let on_save = move |_| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        let id = id.get_value();
        let draft = TodoDraft {
            title: draft_title.get(),
            description: draft_description.get(),
            priority: draft_priority.get(),
            status: draft_status.get(),
        };
        spawn_local(async move {
            match api::update_todo(&id, &UpdateTodoPayload::from_draft(&draft)).await {
                Ok(()) => {
                    store_merge_draft(&store, &id, &draft);
                    let _ = editing_id.try_set(None);
                }
                Err(err) if err.is_unauthorized() => {
                    session.logout();
                    ctx.navigate(Route::Login);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[CARD] save failed: {err}").into());
                    // Edit mode stays open so nothing typed is lost
                    let _ = set_action_error.try_set(Some(format!("Error updating todo: {err}")));
                }
            }
            let _ = set_busy.try_set(false);
        });
    };

    // Delete discards the card's stopwatch, but only once the server confirmed
    let on_delete = move |_| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        let id = id.get_value();
        spawn_local(async move {
            match api::delete_todo(&id).await {
                Ok(()) => {
                    timers.remove(&id);
                    store_remove_todo(&store, &id);
                }
                Err(err) if err.is_unauthorized() => {
                    session.logout();
                    ctx.navigate(Route::Login);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[CARD] delete failed: {err}").into());
                    let _ = set_action_error.try_set(Some(format!("Error deleting todo: {err}")));
                }
            }
            let _ = set_busy.try_set(false);
        });
    };

    view! {
        <div class="todo-card">
            {move || action_error.get().map(|message| view! { <div class="card-error">{message}</div> })}

            {move || if is_editing() {
                view! {
                    <div class="card-body editing">
                        <input
                            type="text"
                            class="card-title-input"
                            prop:value=move || draft_title.get()
                            on:input=move |ev| set_draft_title.set(event_target_value(&ev))
                        />
                        <textarea
                            class="card-description-input"
                            prop:value=move || draft_description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_draft_description.set(textarea.value());
                            }
                        ></textarea>

                        <div class="card-footer">
                            // Timer keeps displaying but cannot be toggled mid-edit
                            <div class="timer-row">
                                <button class="timer-btn disabled" disabled=true>"Timer"</button>
                                <span class="timer-display">{elapsed_label}</span>
                            </div>

                            <div class="meta-row">
                                <div class="priority">
                                    <select
                                        class="priority-select"
                                        on:change=move |ev| {
                                            if let Some(parsed) = Priority::parse(&event_target_value(&ev)) {
                                                set_draft_priority.set(parsed);
                                            }
                                        }
                                    >
                                        {Priority::ALL.iter().map(|p| {
                                            let p = *p;
                                            view! {
                                                <option value=p.as_str() selected=move || draft_priority.get() == p>
                                                    {p.label()}
                                                </option>
                                            }
                                        }).collect_view()}
                                    </select>
                                    <span class=move || priority_dot_class(draft_priority.get())></span>
                                </div>

                                <select
                                    class="status-select"
                                    on:change=move |ev| {
                                        if let Some(parsed) = Status::parse(&event_target_value(&ev)) {
                                            set_draft_status.set(parsed);
                                        }
                                    }
                                >
                                    {Status::ALL.iter().map(|s| {
                                        let s = *s;
                                        view! {
                                            <option value=s.as_str() selected=move || draft_status.get() == s>
                                                {s.label()}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                            </div>

                            <div class="card-actions">
                                <button
                                    class="save-btn"
                                    disabled=move || busy.get()
                                    on:click=on_save
                                >
                                    "Save"
                                </button>
                                <button class="cancel-btn" on:click=on_cancel_edit>"Cancel"</button>
                            </div>
                        </div>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="card-body">
                        <h3 class="card-title">{title.get_value()}</h3>
                        <p class="card-description">{description.get_value()}</p>

                        <div class="card-footer">
                            <div class="timer-row">
                                <button class="timer-btn" on:click=on_toggle_timer>
                                    {move || if timer_running() { "Stop Timer" } else { "Start Timer" }}
                                </button>
                                <span class="timer-display">{elapsed_label}</span>
                            </div>

                            <div class="meta-row">
                                <div class="priority">
                                    <span class="priority-label">{priority.as_str()}</span>
                                    <span class=priority_dot_class(priority)></span>
                                </div>
                                <button
                                    class="status-pill"
                                    disabled=move || busy.get()
                                    on:click=on_cycle_status
                                >
                                    <span class="status-label">{status.label()}</span>
                                    <span class="pill-arrow">"▼"</span>
                                </button>
                            </div>

                            <div class="card-actions">
                                <button class="edit-btn" on:click=on_edit>"Edit"</button>
                                <button
                                    class="delete-btn"
                                    disabled=move || busy.get()
                                    on:click=on_delete
                                >
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
