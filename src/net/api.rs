//! Typed endpoint helpers over `HttpGateway`.
//!
//! These are direct pass-throughs: each builds one request, sends it through
//! the gateway (so bearer injection and 401 teardown apply), and decodes the
//! body. Interpretation of failures is left to the calling page.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::gateway::{ApiRequest, FormPart, HttpGateway};
use super::types::{Application, ApplicationForm, Job, LoginRequest, NewJob, SignupRequest, TokenResponse, UserProfile};

pub const IDENTITY_ENDPOINT: &str = "/auth/me";

fn job_endpoint(job_id: &str) -> String {
    format!("/job/{job_id}")
}

fn apply_endpoint(job_id: &str) -> String {
    format!("applications/apply/{job_id}")
}

fn my_application_endpoint(job_id: &str) -> String {
    format!("applications/my/{job_id}")
}

fn job_applications_endpoint(job_id: &str) -> String {
    format!("applications/job/{job_id}")
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns the gateway error; bad credentials usually surface as `Unauthorized`.
pub async fn login(gateway: &HttpGateway, credentials: &LoginRequest) -> Result<TokenResponse, ApiError> {
    gateway.post_json("/auth/login", credentials).await
}

/// Create an account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns the gateway error, e.g. `Status { 400, .. }` for a taken email.
pub async fn signup(gateway: &HttpGateway, request: &SignupRequest) -> Result<(), ApiError> {
    let body = serde_json::to_value(request).map_err(|e| ApiError::Encode(e.to_string()))?;
    gateway.send(ApiRequest::post_json("/auth/signup", body)).await?;
    Ok(())
}

/// Resolve the token's subject via `GET /auth/me`.
///
/// # Errors
///
/// Any failure means the token is unusable for now.
pub async fn me(gateway: &HttpGateway) -> Result<UserProfile, ApiError> {
    gateway.get_json(IDENTITY_ENDPOINT).await
}

/// List every job via `GET /job/all`.
///
/// # Errors
///
/// Returns the gateway error.
pub async fn fetch_all_jobs(gateway: &HttpGateway) -> Result<Vec<Job>, ApiError> {
    gateway.get_json("/job/all").await
}

/// Fetch one job, falling back to a scan of `/job/all` when the dedicated
/// endpoint fails for a reason other than an invalid session.
///
/// Returns `Ok(None)` when the fallback list has no such id.
///
/// # Errors
///
/// `Unauthorized` from the first call, or the fallback call's error.
pub async fn fetch_job_by_id(gateway: &HttpGateway, job_id: &str) -> Result<Option<Job>, ApiError> {
    match gateway.get_json::<Job>(&job_endpoint(job_id)).await {
        Ok(job) => Ok(Some(job)),
        Err(e) if e.is_unauthorized() => Err(e),
        Err(e) => {
            log::debug!("api: job {job_id} lookup failed ({e}), scanning job list");
            let jobs = fetch_all_jobs(gateway).await?;
            Ok(jobs.into_iter().find(|job| job.id == job_id))
        }
    }
}

/// Create a posting via `POST /job/post_job` (hiring managers only).
///
/// # Errors
///
/// Returns the gateway error; a wrong role shows up as `Status { 403, .. }`.
pub async fn post_job(gateway: &HttpGateway, job: &NewJob) -> Result<(), ApiError> {
    let body = serde_json::to_value(job).map_err(|e| ApiError::Encode(e.to_string()))?;
    gateway.send(ApiRequest::post_json("/job/post_job", body)).await?;
    Ok(())
}

fn application_parts(form: &ApplicationForm) -> Vec<FormPart> {
    let text = |name: &str, value: &str| FormPart::Text { name: name.to_owned(), value: value.to_owned() };
    let mut parts = vec![text("full_name", &form.full_name), text("email", &form.email)];
    if let Some(phone) = form.phone.as_deref().filter(|p| !p.is_empty()) {
        parts.push(text("phone", phone));
    }
    if let Some(letter) = form.cover_letter.as_deref().filter(|c| !c.is_empty()) {
        parts.push(text("cover_letter", letter));
    }
    parts.push(FormPart::File {
        name: "cv".to_owned(),
        file_name: form.cv.file_name.clone(),
        content_type: form.cv.content_type.clone(),
        bytes: form.cv.bytes.clone(),
    });
    parts
}

/// Submit an application as multipart form data.
///
/// Success is what flips the job's `has_applied` server-side; nothing is
/// updated locally.
///
/// # Errors
///
/// Returns the gateway error; validation failures carry field errors.
pub async fn apply_to_job(gateway: &HttpGateway, job_id: &str, form: &ApplicationForm) -> Result<(), ApiError> {
    gateway
        .send(ApiRequest::post_multipart(apply_endpoint(job_id), application_parts(form)))
        .await?;
    Ok(())
}

/// The current applicant's application for `job_id`.
///
/// # Errors
///
/// Returns the gateway error; `Status { 404, .. }` when none exists.
pub async fn fetch_my_application(gateway: &HttpGateway, job_id: &str) -> Result<Application, ApiError> {
    gateway.get_json(&my_application_endpoint(job_id)).await
}

/// Applications visible to the current user's role.
///
/// # Errors
///
/// Returns the gateway error.
pub async fn fetch_all_applications(gateway: &HttpGateway) -> Result<Vec<Application>, ApiError> {
    gateway.get_json("/applications/all").await
}

/// Every application for one job (hiring managers only).
///
/// # Errors
///
/// Returns the gateway error.
pub async fn fetch_applications_for_job(gateway: &HttpGateway, job_id: &str) -> Result<Vec<Application>, ApiError> {
    gateway.get_json(&job_applications_endpoint(job_id)).await
}
