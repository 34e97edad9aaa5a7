//! Route guards wrapping protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both guards read the session from context and re-evaluate on every change.
//! While the session is still resolving they render a placeholder and never
//! redirect: a stored token may yet turn out to be valid. The decision is
//! derived afresh from the current session on every render.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::{Session, SessionState};
use crate::util::auth::{GuardDecision, LOGIN_PATH, require_auth, require_role, should_redirect_unauth};

/// Redirect to `/login` whenever the session has resolved with no user.
fn install_unauth_redirect<F>(state: ReadSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if state.with(should_redirect_unauth) {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

fn render_decision(decision: GuardDecision, children: &ChildrenFn) -> AnyView {
    match decision {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Denied => view! { <AccessDenied/> }.into_any(),
        GuardDecision::Pending => view! { <p class="guard-pending">"Loading..."</p> }.into_any(),
        GuardDecision::RedirectToLogin => ().into_any(),
    }
}

/// Renders `children` for any signed-in user.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<Session>().state();
    install_unauth_redirect(state, use_navigate());
    move || render_decision(state.with(require_auth), &children)
}

/// Renders `children` only for users holding `role`; other signed-in users
/// get the access-denied view in place.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<Session>().state();
    install_unauth_redirect(state, use_navigate());
    move || render_decision(state.with(|s| require_role(s, role)), &children)
}

#[component]
pub fn AccessDenied() -> impl IntoView {
    view! {
        <div class="access-denied">
            <h1>"Access denied"</h1>
            <p>"Your account does not have permission to view this page."</p>
            <A href="/jobs">"Back to jobs"</A>
        </div>
    }
}

/// Clears the session and returns to the login page.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };
    view! {
        <button class="logout-button" type="button" on:click=on_logout>
            "Logout"
        </button>
    }
}
