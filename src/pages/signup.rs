//! Account creation with a role picker.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{Role, SignupRequest};
use crate::state::session::Session;
use crate::util::auth::LOGIN_PATH;

pub(crate) const SIGNUP_FAILED: &str = "Signup failed";
pub(crate) const SIGNUP_SUCCEEDED: &str = "Sign up successful! Redirecting to login...";
/// Delay before leaving for `/login` after a successful signup.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) const REDIRECT_DELAY_MS: u32 = 2_000;

/// Unknown select values fall back to `Applicant`.
pub(crate) fn parse_role(value: &str) -> Role {
    match value {
        "hiring_manager" => Role::HiringManager,
        _ => Role::Applicant,
    }
}

pub(crate) fn validate_signup_input(email: &str, password: &str, role: Role) -> Result<SignupRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(SignupRequest { email: email.to_owned(), password: password.to_owned(), role })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Applicant);
    let error = RwSignal::new(String::new());
    let succeeded = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        succeeded.set(false);
        let request = match validate_signup_input(&email.get(), &password.get(), role.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::signup(session.gateway(), &request).await;
            busy.set(false);
            match outcome {
                Ok(()) => {
                    log::info!("signup: account created for role {}", request.role);
                    succeeded.set(true);
                    #[cfg(feature = "csr")]
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => error.set(e.user_message(SIGNUP_FAILED)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create account"</h1>
                <Show when=move || succeeded.get()>
                    <p class="auth-success">{SIGNUP_SUCCEEDED}</p>
                </Show>
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
                <label class="auth-label">"Role"</label>
                <select
                    class="auth-input"
                    prop:value=move || role.get().as_str()
                    on:change=move |ev| role.set(parse_role(&event_target_value(&ev)))
                >
                    <option value="applicant">"Applicant"</option>
                    <option value="hiring_manager">"Hiring Manager"</option>
                </select>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Sign up"
                </button>
                <p class="auth-footer">"Already have an account? " <A href=LOGIN_PATH>"Login"</A></p>
            </form>
        </div>
    }
}
