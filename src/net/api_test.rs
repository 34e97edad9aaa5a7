use super::*;
use crate::net::gateway::RequestBody;
use crate::net::testing::{RecordingNavigator, ScriptedTransport, gateway, ok_json, status};
use crate::net::types::CvFile;
use futures::executor::block_on;

fn form(phone: Option<&str>) -> ApplicationForm {
    ApplicationForm {
        full_name: "Ann Lee".to_owned(),
        email: "ann@x.com".to_owned(),
        phone: phone.map(str::to_owned),
        cover_letter: None,
        cv: CvFile { file_name: "cv.pdf".to_owned(), content_type: "application/pdf".to_owned(), bytes: vec![1, 2] },
    }
}

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(job_endpoint("5"), "/job/5");
    assert_eq!(apply_endpoint("5"), "applications/apply/5");
    assert_eq!(my_application_endpoint("5"), "applications/my/5");
    assert_eq!(job_applications_endpoint("5"), "applications/job/5");
}

#[test]
fn application_parts_skip_empty_optionals_and_end_with_cv() {
    let parts = application_parts(&form(Some("")));
    let names: Vec<&str> = parts
        .iter()
        .map(|part| match part {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name.as_str(),
        })
        .collect();
    assert_eq!(names, vec!["full_name", "email", "cv"]);
}

#[test]
fn apply_posts_multipart_to_job() {
    let transport = ScriptedTransport::new(vec![ok_json(serde_json::json!({"id": 1}))]);
    let (gw, _tokens) = gateway(transport.clone(), RecordingNavigator::new());

    block_on(apply_to_job(&gw, "42", &form(Some("555")))).unwrap();

    let seen = &transport.requests()[0];
    assert_eq!(seen.path, "applications/apply/42");
    let RequestBody::Multipart(parts) = &seen.body else {
        panic!("expected multipart body");
    };
    assert!(parts.contains(&FormPart::Text { name: "phone".to_owned(), value: "555".to_owned() }));
}

#[test]
fn fetch_job_by_id_uses_dedicated_endpoint() {
    let transport = ScriptedTransport::new(vec![ok_json(serde_json::json!({"id": 5, "title": "Cook"}))]);
    let (gw, _tokens) = gateway(transport.clone(), RecordingNavigator::new());

    let job = block_on(fetch_job_by_id(&gw, "5")).unwrap().unwrap();

    assert_eq!(job.title, "Cook");
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn fetch_job_by_id_falls_back_to_job_list() {
    let transport = ScriptedTransport::new(vec![
        status(404),
        ok_json(serde_json::json!([
            {"id": 4, "title": "Baker"},
            {"id": 5, "title": "Cook", "has_applied": true}
        ])),
    ]);
    let (gw, _tokens) = gateway(transport.clone(), RecordingNavigator::new());

    let job = block_on(fetch_job_by_id(&gw, "5")).unwrap().unwrap();

    assert!(job.has_applied);
    assert_eq!(transport.requests()[1].path, "/job/all");
}

#[test]
fn fetch_job_by_id_missing_from_list_is_none() {
    let transport = ScriptedTransport::new(vec![status(404), ok_json(serde_json::json!([]))]);
    let (gw, _tokens) = gateway(transport, RecordingNavigator::new());

    assert_eq!(block_on(fetch_job_by_id(&gw, "9")).unwrap(), None);
}

#[test]
fn fetch_job_by_id_does_not_fall_back_after_401() {
    let transport = ScriptedTransport::new(vec![status(401)]);
    let (gw, _tokens) = gateway(transport.clone(), RecordingNavigator::new());

    let err = block_on(fetch_job_by_id(&gw, "5")).unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn login_decodes_token_response() {
    let transport = ScriptedTransport::new(vec![ok_json(serde_json::json!({"access_token": "T9", "token_type": "bearer"}))]);
    let (gw, _tokens) = gateway(transport, RecordingNavigator::new());
    let credentials = LoginRequest { email: "a@x.com".to_owned(), password: "pw".to_owned() };

    let token = block_on(login(&gw, &credentials)).unwrap();

    assert_eq!(token.access_token, "T9");
}

#[test]
fn signup_accepts_empty_success_body() {
    let transport = ScriptedTransport::new(vec![Ok(crate::net::gateway::ApiResponse { status: 201, body: String::new() })]);
    let (gw, _tokens) = gateway(transport.clone(), RecordingNavigator::new());
    let request = SignupRequest {
        email: "a@x.com".to_owned(),
        password: "pw".to_owned(),
        role: crate::net::types::Role::HiringManager,
    };

    block_on(signup(&gw, &request)).unwrap();

    assert_eq!(
        transport.requests()[0].body,
        RequestBody::Json(serde_json::json!({"email": "a@x.com", "password": "pw", "role": "hiring_manager"}))
    );
}

#[test]
fn post_job_sends_null_salary_when_blank() {
    let transport = ScriptedTransport::new(vec![ok_json(serde_json::json!({"id": 9}))]);
    let (gw, _tokens) = gateway(transport.clone(), RecordingNavigator::new());
    let job = NewJob {
        title: "Cook".to_owned(),
        description: "Make food".to_owned(),
        location: "Paris".to_owned(),
        salary: None,
    };

    block_on(post_job(&gw, &job)).unwrap();

    let seen = &transport.requests()[0];
    assert_eq!(seen.path, "/job/post_job");
    let RequestBody::Json(body) = &seen.body else {
        panic!("expected json body");
    };
    assert_eq!(body["salary"], serde_json::Value::Null);
    assert_eq!(body["title"], "Cook");
}
