//! Job detail and apply form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The job is loaded once per mount and again whenever the job id or the
//! signed-in user changes. Applicants who already applied are sent to the
//! existing-application view instead (history entry replaced). A successful
//! submit goes there too; that view re-fetches, nothing is updated locally.

#[cfg(test)]
#[path = "apply_job_test.rs"]
mod apply_job_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{ApplicationForm, CvFile, Job, Role, UserProfile};
use crate::state::session::Session;
use crate::util::apply_flow::{
    JOB_NOT_FOUND, JobDetailLoad, WorkflowDecision, existing_application_path, run_job_detail_load,
};
use crate::util::lifetime::ViewLifetime;

use super::{replace_history, use_job_id};

pub(crate) const SUBMIT_FAILED: &str = "Failed to submit application.";

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ApplyInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
}

/// Identifies one CV selection. Every pick or removal takes a new ticket, and
/// a file read only lands if its ticket is still the latest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct CvTicket(u32);

impl CvTicket {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    pub(crate) fn is_latest(self, latest: Self) -> bool {
        self == latest
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Check who is applying and what they filled in, in the order the form
/// reports problems.
pub(crate) fn validate_application(
    user: Option<&UserProfile>,
    input: &ApplyInput,
    cv: Option<CvFile>,
) -> Result<ApplicationForm, &'static str> {
    let Some(user) = user else {
        return Err("Please login to apply");
    };
    if user.role != Role::Applicant {
        return Err("Only applicants can apply to jobs. Please login with an applicant account.");
    }
    let (Some(full_name), Some(email)) = (non_empty(&input.full_name), non_empty(&input.email)) else {
        return Err("Full name and email are required.");
    };
    let Some(cv) = cv else {
        return Err("Please attach a CV to apply.");
    };
    Ok(ApplicationForm {
        full_name,
        email,
        phone: non_empty(&input.phone),
        cover_letter: non_empty(&input.cover_letter),
        cv,
    })
}

#[cfg(feature = "csr")]
async fn read_cv_file(file: web_sys::File) -> Result<CvFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read CV: {e:?}"))?;
    Ok(CvFile {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn ApplyJobPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let navigate = use_navigate();
    let job_id = use_job_id();
    let user = Memo::new(move |_| state.with(|s| s.user.clone()));

    let job = RwSignal::new(None::<Job>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let field_errors = RwSignal::new(BTreeMap::<String, String>::new());
    let input = RwSignal::new(ApplyInput::default());
    let cv = RwSignal::new(None::<CvFile>);
    let cv_ticket = RwSignal::new(CvTicket::default());
    let submitting = RwSignal::new(false);
    let cv_input = NodeRef::<leptos::html::Input>::new();

    {
        let session = session.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            let id = job_id.get();
            let viewer = user.get();
            loading.set(true);
            error.set(String::new());
            let Some(id) = id else {
                error.set(JOB_NOT_FOUND.to_owned());
                loading.set(false);
                return;
            };
            let lifetime = ViewLifetime::scoped();
            let gateway = session.gateway().clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                run_job_detail_load(&gateway, &id, viewer.as_ref(), &lifetime, |outcome| match outcome {
                    JobDetailLoad::Ready { decision: WorkflowDecision::RedirectToApplication(path), .. } => {
                        navigate(&path, replace_history());
                    }
                    JobDetailLoad::Ready { job: loaded, decision: WorkflowDecision::ShowApplyForm } => {
                        job.set(Some(loaded));
                        loading.set(false);
                    }
                    JobDetailLoad::Failed(message) => {
                        job.set(None);
                        error.set(message);
                        loading.set(false);
                    }
                })
                .await;
            });
        });
    }

    Effect::new(move || {
        if let Some(email) = user.with(|u| u.as_ref().map(|u| u.email.clone())) {
            input.update(|i| i.email = email);
        }
    });

    let clear_cv = move || {
        cv_ticket.update(|t| *t = t.next());
        cv.set(None);
        if let Some(el) = cv_input.get_untracked() {
            el.set_value("");
        }
    };

    let on_cv_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let el: web_sys::HtmlInputElement = event_target(&ev);
            cv_ticket.update(|t| *t = t.next());
            let ticket = cv_ticket.get_untracked();
            let Some(file) = el.files().and_then(|files| files.get(0)) else {
                cv.set(None);
                return;
            };
            leptos::task::spawn_local(async move {
                let read = read_cv_file(file).await;
                if !ticket.is_latest(cv_ticket.get_untracked()) {
                    log::debug!("apply: dropping CV read for a replaced selection");
                    return;
                }
                match read {
                    Ok(file) => cv.set(Some(file)),
                    Err(message) => {
                        log::warn!("apply: {message}");
                        cv.set(None);
                        error.set(message);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_clear = move |_| {
        input.set(ApplyInput {
            email: user.with_untracked(|u| u.as_ref().map(|u| u.email.clone()).unwrap_or_default()),
            ..ApplyInput::default()
        });
        clear_cv();
        field_errors.set(BTreeMap::new());
        error.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let Some(id) = job_id.get_untracked() else {
            return;
        };
        let form = match user.with_untracked(|u| validate_application(u.as_ref(), &input.get_untracked(), cv.get_untracked())) {
            Ok(form) => form,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        field_errors.set(BTreeMap::new());
        submitting.set(true);
        let gateway = session.gateway().clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::apply_to_job(&gateway, &id, &form).await;
            submitting.set(false);
            match outcome {
                Ok(()) => {
                    log::info!("apply: submitted application for job {id}");
                    navigate(&existing_application_path(&id), replace_history());
                }
                Err(e) => {
                    field_errors.set(e.field_errors());
                    error.set(e.user_message(SUBMIT_FAILED));
                }
            }
        });
    };

    let field_error = move |name: &'static str| {
        move || {
            field_errors.with(|errors| errors.get(name).cloned()).map(|message| view! { <p class="field-error">{message}</p> })
        }
    };
    let can_submit = move || {
        input.with(|i| !i.full_name.trim().is_empty() && !i.email.trim().is_empty()) && cv.with(Option::is_some) && !submitting.get()
    };

    view! {
        <div class="apply-page">
            <div class="apply-page__header">
                <h1>{move || job.with(|j| j.as_ref().map_or_else(|| "Job".to_owned(), |j| j.title.clone()))}</h1>
                <a href="/jobs">"Back"</a>
            </div>
            <Show when=move || loading.get()>
                <p class="page-loading">"Loading job..."</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>
            {move || job.get().map(|j| view! {
                <div class="apply-page__job">
                    <p>{j.location.clone().unwrap_or_default()}</p>
                    <p>{j.description.clone()}</p>
                    {j.salary.clone().map(|s| view! { <span>"Salary: " {s}</span> })}
                    {j.posted_at.clone().map(|p| view! { <span>"Posted: " {p}</span> })}
                </div>
            })}
            <form class="apply-form" hidden=move || job.with(Option::is_none) on:submit=on_submit>
                <label>"Full name"</label>
                <input
                    required
                    prop:value=move || input.with(|i| i.full_name.clone())
                    on:input=move |ev| input.update(|i| i.full_name = event_target_value(&ev))
                />
                {field_error("full_name")}
                <label>"Email"</label>
                <input
                    type="email"
                    required
                    prop:value=move || input.with(|i| i.email.clone())
                    on:input=move |ev| input.update(|i| i.email = event_target_value(&ev))
                />
                {field_error("email")}
                <label>"Phone"</label>
                <input
                    prop:value=move || input.with(|i| i.phone.clone())
                    on:input=move |ev| input.update(|i| i.phone = event_target_value(&ev))
                />
                {field_error("phone")}
                <label>"Cover letter"</label>
                <textarea
                    placeholder="Write a brief cover letter"
                    prop:value=move || input.with(|i| i.cover_letter.clone())
                    on:input=move |ev| input.update(|i| i.cover_letter = event_target_value(&ev))
                ></textarea>
                {field_error("cover_letter")}
                <label>"CV"</label>
                <input
                    node_ref=cv_input
                    type="file"
                    accept="application/pdf,application/msword,application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    on:change=on_cv_change
                />
                {field_error("cv")}
                {move || cv.get().map(|file| view! {
                    <p class="apply-form__file">
                        {file.file_name}
                        <button type="button" on:click=move |_| clear_cv()>"Remove file"</button>
                    </p>
                })}
                <div class="apply-form__actions">
                    <button type="button" disabled=move || submitting.get() on:click=on_clear>"Clear"</button>
                    <button type="submit" disabled=move || !can_submit()>
                        {move || if submitting.get() { "Applying..." } else { "Apply" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
