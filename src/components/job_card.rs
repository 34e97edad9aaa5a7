//! Job summary card for the jobs list.

#[cfg(test)]
#[path = "job_card_test.rs"]
mod job_card_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{Job, Role};
use crate::util::apply_flow::existing_application_path;

/// Primary link shown on a card, by viewer role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobAction {
    ViewApplications(String),
    ViewMyApplication(String),
    Apply(String),
}

pub fn job_action(role: Option<Role>, job: &Job) -> JobAction {
    match role {
        Some(Role::HiringManager) => JobAction::ViewApplications(format!("/jobs/{}/applications", job.id)),
        Some(Role::Applicant) if job.has_applied => JobAction::ViewMyApplication(existing_application_path(&job.id)),
        _ => JobAction::Apply(format!("/jobs/{}", job.id)),
    }
}

fn short_id(id: &str) -> &str {
    id.char_indices().nth(8).map_or(id, |(end, _)| &id[..end])
}

#[component]
pub fn JobCard(job: Job, role: Option<Role>) -> impl IntoView {
    let applied_note = (role == Some(Role::Applicant) && job.has_applied).then_some("You have already applied to this job.");
    let action = match job_action(role, &job) {
        JobAction::ViewApplications(href) => view! { <A href=href>"View applications"</A> }.into_any(),
        JobAction::ViewMyApplication(href) => view! { <A href=href>"View my application"</A> }.into_any(),
        JobAction::Apply(href) => view! { <A href=href>"View & apply"</A> }.into_any(),
    };
    let salary = job.salary.clone();
    let posted = job.posted_at.clone();

    view! {
        <div class="job-card">
            <div class="job-card__header">
                <h3>{job.title.clone()}</h3>
                <span class="job-card__id">"ID: " {short_id(&job.id).to_owned()}</span>
            </div>
            <p class="job-card__location">{job.location.clone().unwrap_or_default()}</p>
            {match applied_note {
                Some(note) => view! { <p class="job-card__note">{note}</p> }.into_any(),
                None => view! { <p class="job-card__description">{job.description.clone()}</p> }.into_any(),
            }}
            <div class="job-card__meta">
                {salary.map(|s| view! { <span>"Salary: " {s}</span> })}
                {posted.map(|p| view! { <span>"Posted: " {p}</span> })}
            </div>
            <div class="job-card__actions">{action}</div>
        </div>
    }
}
