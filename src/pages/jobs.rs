//! Jobs list: every posting, with role-specific actions per card.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::guard::LogoutButton;
use crate::components::job_card::JobCard;
use crate::net::api;
use crate::net::types::{Job, Role};
use crate::state::session::Session;

use super::spawn_scoped;

pub(crate) const JOBS_LOAD_FAILED: &str = "Failed to load jobs. Are you logged in?";

pub(crate) fn jobs_subtitle(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::HiringManager) => "These are the jobs you've posted as a hiring manager.",
        _ => "Browse open roles and apply to ones that fit you.",
    }
}

pub(crate) fn empty_jobs_message(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::HiringManager) => "Post your first job to start receiving applications.",
        _ => "No jobs available right now. Check back later.",
    }
}

#[component]
pub fn JobsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let jobs = RwSignal::new(Vec::<Job>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);
    let role = Memo::new(move |_| state.with(|s| s.role()));

    Effect::new(move || {
        role.track();
        reload.track();
        loading.set(true);
        error.set(String::new());
        let gateway = session.gateway().clone();
        spawn_scoped(async move { api::fetch_all_jobs(&gateway).await }, move |outcome| {
            match outcome {
                Ok(list) => jobs.set(list),
                Err(e) => error.set(e.user_message(JOBS_LOAD_FAILED)),
            }
            loading.set(false);
        });
    });

    let is_manager = move || role.get() == Some(Role::HiringManager);

    view! {
        <div class="jobs-page">
            <div class="jobs-page__header">
                <div>
                    <h1>"Jobs"</h1>
                    <p class="jobs-page__subtitle">{move || jobs_subtitle(role.get())}</p>
                </div>
                <div class="jobs-page__actions">
                    <Show when=is_manager>
                        <A href="/jobs/post">"Post Job"</A>
                    </Show>
                    <A href="/applications">"Applications"</A>
                    <button
                        type="button"
                        disabled=move || loading.get()
                        on:click=move |_| reload.update(|n| *n += 1)
                    >
                        {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                    </button>
                    <LogoutButton/>
                </div>
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>
            {move || {
                if loading.get() {
                    return view! { <p class="page-loading">"Loading jobs..."</p> }.into_any();
                }
                if !error.get().is_empty() {
                    return ().into_any();
                }
                let list = jobs.get();
                if list.is_empty() {
                    return view! {
                        <div class="jobs-page__empty">
                            <h2>"No jobs yet"</h2>
                            <p>{empty_jobs_message(role.get())}</p>
                        </div>
                    }
                        .into_any();
                }
                let viewer = role.get();
                view! {
                    <div class="jobs-page__grid">
                        {list.into_iter().map(|job| view! { <JobCard job=job role=viewer/> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
