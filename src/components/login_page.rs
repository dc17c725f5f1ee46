//! Login Page Component
//!
//! Email/password form. Local validation gates the request; a server
//! rejection shows as a top-level status line, never as a field error.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Route};
use crate::session::use_session;
use crate::validate::{validate_login, FieldErrors};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (status, set_status) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    // Already signed in: go straight to the cards (once the startup token
    // check has settled).
    Effect::new(move |_| {
        if !session.loading.get() && session.is_logged_in.get() {
            ctx.navigate(Route::Todos);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        let field_errors = validate_login(&email_value, &password_value);
        if !field_errors.is_empty() {
            set_errors.set(field_errors);
            return;
        }
        set_errors.set(FieldErrors::new());
        set_status.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(auth) => {
                    session.login(&auth.token, auth.user);
                    ctx.navigate(Route::Todos);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[LOGIN] {err}").into());
                    let message = err
                        .server_message()
                        .unwrap_or("Login failed. Please try again.")
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
        <Show
            when=move || !session.loading.get()
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            <div class="auth-page">
                <div class="auth-card">
                    <h2 class="auth-title">"sign in"</h2>

                    {move || status.get().map(|message| view! { <div class="form-status error">{message}</div> })}

                    <form class="auth-form" on:submit=submit>
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
                            {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
