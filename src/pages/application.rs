//! The signed-in applicant's own application for one job.

#[cfg(test)]
#[path = "application_test.rs"]
mod application_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::gateway::HttpGateway;
use crate::net::types::{Application, Job, Role};
use crate::state::session::Session;

use super::{spawn_scoped, use_job_id};

pub(crate) const NO_APPLICATION: &str = "No application found for this job.";
pub(crate) const APPLICATION_LOAD_FAILED: &str = "Could not load your application for this job.";

pub(crate) fn application_error_message(error: &ApiError) -> &'static str {
    match error.status() {
        Some(404) => NO_APPLICATION,
        _ => APPLICATION_LOAD_FAILED,
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Loaded {
    job: Option<Job>,
    application: Result<Application, &'static str>,
}

async fn load(gateway: HttpGateway, job_id: String) -> Loaded {
    let job = match api::fetch_job_by_id(&gateway, &job_id).await {
        Ok(job) => job,
        Err(e) => {
            log::warn!("application: job {job_id} failed to load: {e}");
            None
        }
    };
    let application = api::fetch_my_application(&gateway, &job_id)
        .await
        .map_err(|e| application_error_message(&e));
    Loaded { job, application }
}

#[component]
pub fn ApplicationPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let job_id = use_job_id();
    let loaded = RwSignal::new(None::<Loaded>);

    Effect::new(move || {
        let Some(id) = job_id.get() else {
            loaded.set(Some(Loaded { job: None, application: Err(NO_APPLICATION) }));
            return;
        };
        loaded.set(None);
        let gateway = session.gateway().clone();
        spawn_scoped(load(gateway, id), move |result| loaded.set(Some(result)));
    });

    let is_applicant = move || state.with(|s| s.has_role(Role::Applicant));

    view! {
        <div class="application-page">
            <div class="application-page__header">
                <h1>
                    {move || {
                        loaded
                            .with(|l| l.as_ref().and_then(|l| l.job.as_ref()).map(|j| format!("Application: {}", j.title)))
                            .unwrap_or_else(|| "Your application".to_owned())
                    }}
                </h1>
                <A href="/jobs">"Back"</A>
            </div>
            <Show
                when=is_applicant
                fallback=|| view! { <p class="page-error">"Only applicants have applications to view."</p> }
            >
                {move || match loaded.get() {
                    None => view! { <p class="page-loading">"Loading application..."</p> }.into_any(),
                    Some(Loaded { job, application }) => view! {
                        {job.map(|j| view! {
                            <div class="application-page__job">
                                <p>{j.location.unwrap_or_default()}</p>
                                <p>{if j.description.is_empty() { "No description provided.".to_owned() } else { j.description }}</p>
                            </div>
                        })}
                        {match application {
                            Ok(app) => view! { <ApplicationDetails application=app/> }.into_any(),
                            Err(message) => view! { <p class="page-error">{message}</p> }.into_any(),
                        }}
                    }
                        .into_any(),
                }}
            </Show>
        </div>
    }
}

/// Read-only field list for one application.
#[component]
pub fn ApplicationDetails(application: Application) -> impl IntoView {
    let status = application.status_label().to_owned();
    view! {
        <dl class="application-details">
            <dt>"Full name"</dt>
            <dd>{application.full_name}</dd>
            <dt>"Email"</dt>
            <dd>{application.email}</dd>
            {application.phone.map(|phone| view! { <dt>"Phone"</dt> <dd>{phone}</dd> })}
            {application.cover_letter.map(|letter| view! { <dt>"Cover letter"</dt> <dd class="application-details__letter">{letter}</dd> })}
            <dt>"Status"</dt>
            <dd>{status}</dd>
            {application.submitted_at.map(|at| view! { <dt>"Submitted"</dt> <dd>{at}</dd> })}
            <dt>"CV"</dt>
            <dd>
                {match application.cv_download_url {
                    Some(url) => view! { <a href=url target="_blank" rel="noreferrer">"Download CV"</a> }.into_any(),
                    None => view! { <span>"No CV available"</span> }.into_any(),
                }}
            </dd>
        </dl>
    }
}
