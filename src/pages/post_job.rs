//! Job posting form (hiring managers).

#[cfg(test)]
#[path = "post_job_test.rs"]
mod post_job_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::NewJob;
use crate::state::session::Session;

pub(crate) const POST_FAILED: &str = "Failed to post job. Make sure you are logged in as a hiring manager.";
pub(crate) const POST_SUCCEEDED: &str = "Job posted successfully.";
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
const REDIRECT_DELAY_MS: u32 = 600;

/// Salary accepts digits only; any other edit is rejected and `current` kept.
pub(crate) fn accept_salary_edit(current: &str, edited: String) -> String {
    if edited.chars().all(|c| c.is_ascii_digit()) {
        edited
    } else {
        current.to_owned()
    }
}

pub(crate) fn validate_new_job(title: &str, description: &str, location: &str, salary: &str) -> Result<NewJob, &'static str> {
    let (title, description, location) = (title.trim(), description.trim(), location.trim());
    if title.is_empty() || description.is_empty() || location.is_empty() {
        return Err("Please fill in title, description, and location.");
    }
    let salary = salary.trim();
    Ok(NewJob {
        title: title.to_owned(),
        description: description.to_owned(),
        location: location.to_owned(),
        salary: (!salary.is_empty()).then(|| salary.to_owned()),
    })
}

#[component]
pub fn PostJobPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let salary = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        let job = match validate_new_job(&title.get(), &description.get(), &location.get(), &salary.get()) {
            Ok(job) => job,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        let gateway = session.gateway().clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::post_job(&gateway, &job).await;
            busy.set(false);
            match outcome {
                Ok(()) => {
                    log::info!("post job: created \"{}\"", job.title);
                    success.set(POST_SUCCEEDED.to_owned());
                    #[cfg(feature = "csr")]
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate("/jobs", NavigateOptions::default());
                }
                Err(e) => error.set(e.user_message(POST_FAILED)),
            }
        });
    };

    let on_reset = move |_| {
        for field in [title, description, location, salary] {
            field.set(String::new());
        }
        error.set(String::new());
        success.set(String::new());
    };

    view! {
        <div class="post-job-page">
            <div class="post-job-page__header">
                <div>
                    <h1>"Post a job"</h1>
                    <p>"Create a new job posting. Only hiring managers can post jobs."</p>
                </div>
                <A href="/jobs">"Back"</A>
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>
            <Show when=move || !success.get().is_empty()>
                <p class="page-success">{move || success.get()}</p>
            </Show>
            <form class="post-job-form" on:submit=on_submit>
                <label>"Title"</label>
                <input
                    required
                    placeholder="e.g. Full Stack Engineer"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <label>"Location"</label>
                <input
                    required
                    placeholder="e.g. London (Hybrid) or Remote"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <label>"Salary"</label>
                <input
                    inputmode="numeric"
                    placeholder="e.g. 50000"
                    prop:value=move || salary.get()
                    on:input=move |ev| salary.update(|s| *s = accept_salary_edit(s, event_target_value(&ev)))
                />
                <p class="post-job-form__hint">"Enter numbers only. Example: 50000 (not 50k)."</p>
                <label>"Description"</label>
                <textarea
                    required
                    placeholder="Role summary, responsibilities, requirements, tech stack..."
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <div class="post-job-form__actions">
                    <button type="button" disabled=move || busy.get() on:click=on_reset>"Reset"</button>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Posting..." } else { "Post job" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
