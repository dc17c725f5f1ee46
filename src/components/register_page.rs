//! Register Page Component
//!
//! Five-field registration form. On success the new account lands on the
//! login page; a duplicate username or other server rejection shows as a
//! top-level status line.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RegisterPayload};
use crate::context::{AppContext, Route};
use crate::validate::{validate_registration, FieldErrors, RegistrationInput};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (status, set_status) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let first_name_value = first_name.get();
        let last_name_value = last_name.get();
        let username_value = username.get();
        let email_value = email.get();
        let password_value = password.get();

        let field_errors = validate_registration(&RegistrationInput {
            first_name: &first_name_value,
            last_name: &last_name_value,
            username: &username_value,
            email: &email_value,
            password: &password_value,
        });
        if !field_errors.is_empty() {
            set_errors.set(field_errors);
            return;
        }
        set_errors.set(FieldErrors::new());
        set_status.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let payload = RegisterPayload {
                first_name: &first_name_value,
                last_name: &last_name_value,
                username: &username_value,
                email: &email_value,
                password: &password_value,
            };
            match api::register(&payload).await {
                Ok(()) => ctx.navigate(Route::Login),
                Err(err) => {
                    web_sys::console::error_1(&format!("[REGISTER] {err}").into());
                    let message = err
                        .server_message()
                        .unwrap_or("Registration failed. Please try again.")
                        .to_string();
                    let _ = set_status.try_set(Some(message));
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
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-title">"sign up"</h2>

                {move || status.get().map(|message| view! { <div class="form-status error">{message}</div> })}

                <form class="auth-form" on:submit=submit>
                    <div class="form-field">
                        <label for="firstName">"First Name"</label>
                        <input
                            type="text"
                            id="firstName"
                            prop:value=move || first_name.get()
                            on:input=move |ev| set_first_name.set(event_target_value(&ev))
                        />
                        {field_error("firstName")}
                    </div>

                    <div class="form-field">
                        <label for="lastName">"Last Name"</label>
                        <input
                            type="text"
                            id="lastName"
                            prop:value=move || last_name.get()
                            on:input=move |ev| set_last_name.set(event_target_value(&ev))
                        />
                        {field_error("lastName")}
                    </div>

                    <div class="form-field">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                        {field_error("username")}
                    </div>

                    <div class="form-field">
                        <label for="email">"Email"</label>
                        <input
                            type="text"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        {field_error("email")}
                    </div>

                    <div class="form-field">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        {field_error("password")}
                    </div>

                    <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                        "Register"
                    </button>
                </form>
            </div>
        </div>
    }
}
