//! Application lists: everything visible to the user, and per-job for
//! hiring managers.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Application, Role};
use crate::state::session::Session;
use crate::util::apply_flow::existing_application_path;

use super::{spawn_scoped, use_job_id};

pub(crate) const APPLICATIONS_LOAD_FAILED: &str = "Failed to load applications.";
pub(crate) const JOB_APPLICATIONS_LOAD_FAILED: &str = "Failed to load applications. Make sure you have permission.";

pub(crate) fn applications_subtitle(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::HiringManager) => "All applications across your posted jobs.",
        _ => "Your submitted job applications.",
    }
}

pub(crate) fn received_count(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} application{plural} received")
}

/// Where a job cell in the all-applications table points for this viewer.
pub(crate) fn job_link(viewer: Option<Role>, job_id: &str) -> String {
    match viewer {
        Some(Role::HiringManager) => format!("/jobs/{job_id}/applications"),
        _ => existing_application_path(job_id),
    }
}

/// Badge modifier for a status value.
pub(crate) fn status_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "pending" => "status--pending",
        "accepted" => "status--accepted",
        "rejected" => "status--rejected",
        _ => "status--other",
    }
}

/// Full `class` value for a status badge.
pub(crate) fn status_badge(status: &str) -> String {
    format!("status {}", status_class(status))
}

#[derive(Clone, Debug, PartialEq)]
enum ListState {
    Loading,
    Ready(Vec<Application>),
    Failed(String),
}

impl ListState {
    fn from_result(result: Result<Vec<Application>, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(list) => Self::Ready(list),
            Err(e) => Self::Failed(e.user_message(fallback)),
        }
    }
}

#[component]
fn ApplicationsTable(applications: Vec<Application>, show_job: bool, viewer: Option<Role>) -> impl IntoView {
    if applications.is_empty() {
        return view! { <p class="applications-empty">"No applications found."</p> }.into_any();
    }
    let rows = applications
        .into_iter()
        .map(|app| {
            let status = app.status_label().to_owned();
            let badge = status_badge(&status);
            let job = show_job.then(|| {
                let label = app.job_title.clone().or_else(|| app.job_id.clone()).unwrap_or_default();
                match app.job_id.clone() {
                    Some(id) => view! { <td><A href=job_link(viewer, &id)>{label}</A></td> }.into_any(),
                    None => view! { <td>{label}</td> }.into_any(),
                }
            });
            view! {
                <tr>
                    {job}
                    <td>{app.full_name}</td>
                    <td>
                        {app.email}
                        {app.phone.map(|phone| view! { <br/> {phone} })}
                    </td>
                    <td><span class=badge>{status}</span></td>
                    <td>{app.submitted_at.unwrap_or_default()}</td>
                    <td>
                        {app.cv_download_url.map(|url| view! { <a href=url target="_blank" rel="noreferrer">"Download CV"</a> })}
                    </td>
                </tr>
            }
        })
        .collect_view();
    view! {
        <table class="applications-table">
            <thead>
                <tr>
                    {show_job.then(|| view! { <th>"Job"</th> })}
                    <th>"Applicant"</th>
                    <th>"Contact"</th>
                    <th>"Status"</th>
                    <th>"Submitted"</th>
                    <th>"CV"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
        .into_any()
}

fn render_list(state: ListState, show_job: bool, viewer: Option<Role>) -> AnyView {
    match state {
        ListState::Loading => view! { <p class="page-loading">"Loading applications..."</p> }.into_any(),
        ListState::Failed(message) => view! { <p class="page-error">{message}</p> }.into_any(),
        ListState::Ready(list) => view! { <ApplicationsTable applications=list show_job=show_job viewer=viewer/> }.into_any(),
    }
}

#[component]
pub fn AllApplicationsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let list = RwSignal::new(ListState::Loading);

    Effect::new(move || {
        let gateway = session.gateway().clone();
        spawn_scoped(async move { api::fetch_all_applications(&gateway).await }, move |result| {
            list.set(ListState::from_result(result, APPLICATIONS_LOAD_FAILED));
        });
    });

    view! {
        <div class="applications-page">
            <div class="applications-page__header">
                <div>
                    <h1>"Applications"</h1>
                    <p>{move || applications_subtitle(state.with(|s| s.role()))}</p>
                </div>
                <A href="/jobs">"Back"</A>
            </div>
            {move || render_list(list.get(), true, state.with(|s| s.role()))}
        </div>
    }
}

#[component]
pub fn JobApplicationsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let job_id = use_job_id();
    let list = RwSignal::new(ListState::Loading);
    let job_title = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = job_id.get() else {
            list.set(ListState::Failed(JOB_APPLICATIONS_LOAD_FAILED.to_owned()));
            return;
        };
        list.set(ListState::Loading);
        let gateway = session.gateway().clone();
        spawn_scoped(
            async move {
                let applications = api::fetch_applications_for_job(&gateway, &id).await;
                let job = api::fetch_job_by_id(&gateway, &id).await.ok().flatten();
                (applications, job)
            },
            move |(applications, job)| {
                job_title.set(job.map(|j| j.title));
                list.set(ListState::from_result(applications, JOB_APPLICATIONS_LOAD_FAILED));
            },
        );
    });

    let heading = move || {
        job_title
            .get()
            .or_else(|| job_id.get().map(|id| format!("Job #{id}")))
            .map(|title| format!("Applications for {title}"))
            .unwrap_or_else(|| "Applications".to_owned())
    };
    let count = move || list.with(|l| if let ListState::Ready(items) = l { Some(received_count(items.len())) } else { None });

    view! {
        <div class="applications-page">
            <div class="applications-page__header">
                <div>
                    <h1>{heading}</h1>
                    <p>{count}</p>
                </div>
                <A href="/jobs">"Back to Jobs"</A>
            </div>
            {move || render_list(list.get(), false, Some(Role::HiringManager))}
        </div>
    }
}
