//! Create Todo Modal
//!
//! Validated creation form in a modal overlay. On success it resets itself,
//! closes, and fires the reload trigger so the grid refetches; the server
//! assigns the new card's identifier.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Route};
use crate::models::{Priority, Status};
use crate::session::use_session;
use crate::validate::{validate_todo, FieldErrors, TodoFormInput};

#[component]
pub fn CreateTodoModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    // Control values stay raw strings until the validation gate parses them
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(Priority::Medium.as_str().to_string());
    let (task_status, set_task_status) = signal(Status::Pending.as_str().to_string());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    // Also called from submit continuations, where the page may already be
    // gone, so writes are the try_ variants.
    let reset_form = move || {
        let _ = set_title.try_set(String::new());
        let _ = set_description.try_set(String::new());
        let _ = set_priority.try_set(Priority::Medium.as_str().to_string());
        let _ = set_task_status.try_set(Status::Pending.as_str().to_string());
        let _ = set_errors.try_set(FieldErrors::new());
        let _ = set_submit_error.try_set(None);
    };

    let cancel = move |_| {
        reset_form();
        set_open.set(false);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let title_value = title.get();
        let description_value = description.get();
        let priority_value = priority.get();
        let status_value = task_status.get();

        let draft = match validate_todo(&TodoFormInput {
            title: &title_value,
            description: &description_value,
            priority: &priority_value,
            status: &status_value,
        }) {
            Ok(draft) => draft,
            Err(field_errors) => {
                set_errors.set(field_errors);
                return;
            }
        };
        set_errors.set(FieldErrors::new());
        set_submit_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            match api::create_todo(&draft).await {
                Ok(()) => {
                    reset_form();
                    let _ = set_open.try_set(false);
                    ctx.reload();
                }
                Err(err) if err.is_unauthorized() => {
                    session.logout();
                    ctx.navigate(Route::Login);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[CREATE] {err}").into());
                    let _ = set_submit_error
                        .try_set(Some("Failed to create todo. Please try again.".to_string()));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            errors
                .with(|errs| errs.get(field).cloned())
                .map(|message| view! { <div class="field-error">{message}</div> })
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h2 class="modal-title">"Create New Task"</h2>

                    {move || submit_error.get().map(|message| view! { <div class="form-status error">{message}</div> })}

                    <form class="todo-form" on:submit=submit>
                        <div class="form-field">
                            <label for="title">"Title"</label>
                            <input
                                type="text"
                                id="title"
                                placeholder="Enter title"
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                            />
                            {field_error("title")}
                        </div>

                        <div class="form-field">
                            <label for="description">"Description"</label>
                            <textarea
                                id="description"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                            {field_error("description")}
                        </div>

                        <div class="form-row">
                            <div class="form-field">
                                <label for="priority">"Priority"</label>
                                <select
                                    id="priority"
                                    on:change=move |ev| set_priority.set(event_target_value(&ev))
                                >
                                    {Priority::ALL.iter().map(|p| {
                                        let p = *p;
                                        view! {
                                            <option value=p.as_str() selected=move || priority.get() == p.as_str()>
                                                {p.label()}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                                {field_error("priority")}
                            </div>

                            <div class="form-field">
                                <label for="status">"Status"</label>
                                <select
                                    id="status"
                                    on:change=move |ev| set_task_status.set(event_target_value(&ev))
                                >
                                    {Status::ALL.iter().map(|s| {
                                        let s = *s;
                                        view! {
                                            <option value=s.as_str() selected=move || task_status.get() == s.as_str()>
                                                {s.label()}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                                {field_error("status")}
                            </div>
                        </div>

                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=cancel>"Cancel"</button>
                            <button type="submit" class="create-btn" disabled=move || submitting.get()>
                                {move || if submitting.get() { "Creating..." } else { "Create" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
