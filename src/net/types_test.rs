use super::*;

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_accepts_numeric_id() {
    let user: UserProfile =
        serde_json::from_value(serde_json::json!({"id": 1, "email": "a@x.com", "role": "applicant"})).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.role, Role::Applicant);
}

#[test]
fn user_profile_rejects_unknown_role() {
    let result: Result<UserProfile, _> =
        serde_json::from_value(serde_json::json!({"id": "u1", "email": "a@x.com", "role": "admin"}));
    assert!(result.is_err());
}

#[test]
fn role_serializes_snake_case() {
    assert_eq!(serde_json::to_value(Role::HiringManager).unwrap(), serde_json::json!("hiring_manager"));
    assert_eq!(Role::Applicant.to_string(), "applicant");
}

// =============================================================
// Job
// =============================================================

#[test]
fn job_has_applied_defaults_false_when_absent() {
    let job: Job = serde_json::from_value(serde_json::json!({"id": 7, "title": "Welder"})).unwrap();
    assert!(!job.has_applied);
    assert_eq!(job.description, "");
}

#[test]
fn job_has_applied_accepts_boolish_values() {
    for (raw, expected) in [
        (serde_json::json!(true), true),
        (serde_json::json!(1), true),
        (serde_json::json!(0), false),
        (serde_json::json!("true"), true),
        (serde_json::json!(null), false),
    ] {
        let job: Job =
            serde_json::from_value(serde_json::json!({"id": "j1", "title": "t", "has_applied": raw})).unwrap();
        assert_eq!(job.has_applied, expected);
    }
}

#[test]
fn job_has_applied_rejects_garbage_string() {
    let result: Result<Job, _> =
        serde_json::from_value(serde_json::json!({"id": "j1", "title": "t", "has_applied": "maybe"}));
    assert!(result.is_err());
}

#[test]
fn job_salary_number_becomes_text() {
    let job: Job =
        serde_json::from_value(serde_json::json!({"id": 3, "title": "t", "salary": 55000, "postedAt": "2024-01-02"}))
            .unwrap();
    assert_eq!(job.salary.as_deref(), Some("55000"));
    assert_eq!(job.posted_at.as_deref(), Some("2024-01-02"));
}

// =============================================================
// Application / TokenResponse
// =============================================================

#[test]
fn application_status_label_defaults_to_pending() {
    let app: Application =
        serde_json::from_value(serde_json::json!({"id": 9, "job_id": 3, "full_name": "Ann", "cv_url": "/cv/9"}))
            .unwrap();
    assert_eq!(app.status_label(), "pending");
    assert_eq!(app.job_id.as_deref(), Some("3"));
    assert_eq!(app.cv_download_url.as_deref(), Some("/cv/9"));
}

#[test]
fn token_response_defaults_token_type() {
    let token: TokenResponse = serde_json::from_value(serde_json::json!({"access_token": "T1"})).unwrap();
    assert_eq!(token.access_token, "T1");
    assert_eq!(token.token_type, "bearer");
}
