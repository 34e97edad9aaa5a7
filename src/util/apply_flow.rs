//! Duplicate-application guard for the job detail / apply flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server marks each job with an applicant-scoped `has_applied`. When an
//! applicant opens a job they already applied to, the page replaces itself
//! with the existing-application view instead of showing the form again.
//! The flag is read once per load; it is never polled or updated locally, so
//! a fresh fetch is the only way to observe a new submission.

#[cfg(test)]
#[path = "apply_flow_test.rs"]
mod apply_flow_test;

use crate::net::api;
use crate::net::gateway::HttpGateway;
use crate::net::types::{Job, Role, UserProfile};

use super::lifetime::ViewLifetime;

pub const JOB_NOT_FOUND: &str = "Job not found";
pub const JOB_LOAD_FAILED: &str = "Failed to load job";

/// `/jobs/{job_id}/application`.
pub fn existing_application_path(job_id: &str) -> String {
    format!("/jobs/{job_id}/application")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkflowDecision {
    ShowApplyForm,
    /// Replace the current history entry with this path.
    RedirectToApplication(String),
}

pub fn workflow_decision(user: Option<&UserProfile>, job: &Job) -> WorkflowDecision {
    let is_applicant = user.is_some_and(|user| user.role == Role::Applicant);
    if is_applicant && job.has_applied {
        WorkflowDecision::RedirectToApplication(existing_application_path(&job.id))
    } else {
        WorkflowDecision::ShowApplyForm
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum JobDetailLoad {
    Ready { job: Job, decision: WorkflowDecision },
    Failed(String),
}

/// Fetch `job_id` and decide what the detail page shows.
pub async fn load_job_detail(gateway: &HttpGateway, job_id: &str, user: Option<&UserProfile>) -> JobDetailLoad {
    match api::fetch_job_by_id(gateway, job_id).await {
        Ok(Some(job)) => {
            let decision = workflow_decision(user, &job);
            if let WorkflowDecision::RedirectToApplication(path) = &decision {
                log::info!("apply flow: job {job_id} already applied, redirecting to {path}");
            }
            JobDetailLoad::Ready { job, decision }
        }
        Ok(None) => JobDetailLoad::Failed(JOB_NOT_FOUND.to_owned()),
        Err(e) => {
            log::warn!("apply flow: job {job_id} failed to load: {e}");
            JobDetailLoad::Failed(JOB_LOAD_FAILED.to_owned())
        }
    }
}

/// `load_job_detail`, handing the result to `apply` only if `lifetime` is
/// still live when the response arrives. Returns whether it was applied.
pub async fn run_job_detail_load(
    gateway: &HttpGateway,
    job_id: &str,
    user: Option<&UserProfile>,
    lifetime: &ViewLifetime,
    apply: impl FnOnce(JobDetailLoad),
) -> bool {
    let outcome = load_job_detail(gateway, job_id, user).await;
    let applied = lifetime.apply(outcome, apply);
    if !applied {
        log::debug!("apply flow: view for job {job_id} went away, dropping result");
    }
    applied
}
