//! Email + password login.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::LoginRequest;
use crate::state::session::Session;

use super::replace_history;

pub(crate) const LOGIN_FAILED: &str = "Login failed";

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = match api::login(session.gateway(), &credentials).await {
                Ok(token) => session.login(&token.access_token).await.map_err(|e| e.user_message(LOGIN_FAILED)),
                Err(e) => Err(e.user_message(LOGIN_FAILED)),
            };
            busy.set(false);
            match outcome {
                Ok(_) => navigate("/jobs", replace_history()),
                Err(message) => error.set(message),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Login"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <label class="auth-label">"Email"</label>
                <input
                    class="auth-input"
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label class="auth-label">"Password"</label>
                <input
                    class="auth-input"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
                <p class="auth-footer">"No account? " <A href="/signup">"Sign up"</A></p>
            </form>
        </div>
    }
}
