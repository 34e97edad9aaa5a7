use super::*;

#[test]
fn received_count_pluralizes() {
    assert_eq!(received_count(0), "0 applications received");
    assert_eq!(received_count(1), "1 application received");
    assert_eq!(received_count(3), "3 applications received");
}

#[test]
fn status_class_ignores_case() {
    assert_eq!(status_class("Accepted"), "status--accepted");
    assert_eq!(status_class("PENDING"), "status--pending");
    assert_eq!(status_class("shortlisted"), "status--other");
}

#[test]
fn list_state_prefers_server_detail() {
    let failed = ListState::from_result(
        Err(ApiError::Status { status: 403, body: "{\"detail\":\"Not allowed\"}".to_owned() }),
        JOB_APPLICATIONS_LOAD_FAILED,
    );
    assert_eq!(failed, ListState::Failed("Not allowed".to_owned()));
    let fallback = ListState::from_result(Err(ApiError::Decode("x".to_owned())), APPLICATIONS_LOAD_FAILED);
    assert_eq!(fallback, ListState::Failed(APPLICATIONS_LOAD_FAILED.to_owned()));
}

#[test]
fn subtitle_follows_role() {
    assert_eq!(applications_subtitle(Some(Role::Applicant)), "Your submitted job applications.");
    assert_eq!(applications_subtitle(Some(Role::HiringManager)), "All applications across your posted jobs.");
}

#[test]
fn job_link_follows_viewer_role() {
    assert_eq!(job_link(Some(Role::HiringManager), "9"), "/jobs/9/applications");
    assert_eq!(job_link(Some(Role::Applicant), "9"), "/jobs/9/application");
}

#[test]
fn status_badge_combines_base_and_modifier() {
    assert_eq!(status_badge("Rejected"), "status status--rejected");
    assert_eq!(status_badge("pending"), "status status--pending");
}
