use super::*;
use crate::net::testing::{RecordingNavigator, offline, status};

fn teardown_stage() -> (SessionTeardown, TokenStore, Arc<RecordingNavigator>) {
    let tokens = TokenStore::in_memory("token");
    let navigator = RecordingNavigator::new();
    (SessionTeardown::new(tokens.clone(), navigator.clone()), tokens, navigator)
}

#[test]
fn teardown_clears_token_and_redirects_to_login() {
    let (stage, tokens, navigator) = teardown_stage();
    tokens.set("T1").unwrap();

    stage.teardown();

    assert_eq!(tokens.get(), None);
    assert_eq!(navigator.visits(), vec!["/login".to_owned()]);
    assert!(stage.redirect_issued());
}

#[test]
fn teardown_twice_is_a_single_redirect() {
    let (stage, tokens, navigator) = teardown_stage();
    tokens.set("T1").unwrap();

    stage.teardown();
    stage.teardown();

    assert_eq!(tokens.get(), None);
    assert_eq!(navigator.visits().len(), 1);
}

#[test]
fn teardown_still_clears_a_token_written_after_the_first_redirect() {
    let (stage, tokens, navigator) = teardown_stage();
    stage.teardown();
    tokens.set("T2").unwrap();

    stage.teardown();

    assert_eq!(tokens.get(), None);
    assert_eq!(navigator.visits().len(), 1);
}

#[test]
fn teardown_stage_ignores_non_401_outcomes() {
    let (stage, tokens, navigator) = teardown_stage();
    tokens.set("T1").unwrap();
    let request = ApiRequest::get("/job/all");

    stage.on_response(&request, &status(403));
    stage.on_response(&request, &status(500));
    stage.on_response(&request, &offline());

    assert_eq!(tokens.get().as_deref(), Some("T1"));
    assert!(navigator.visits().is_empty());
}

#[test]
fn teardown_stage_fires_on_401() {
    let (stage, tokens, navigator) = teardown_stage();
    tokens.set("T1").unwrap();

    stage.on_response(&ApiRequest::get("/auth/me"), &status(401));

    assert_eq!(tokens.get(), None);
    assert_eq!(navigator.visits().len(), 1);
}

#[test]
fn bearer_auth_leaves_request_alone_without_token() {
    let stage = BearerAuth::new(TokenStore::in_memory("token"));
    let mut request = ApiRequest::get("/job/all");

    stage.on_request(&mut request);

    assert!(request.headers.is_empty());
}

#[test]
fn bearer_auth_formats_header() {
    let tokens = TokenStore::in_memory("token");
    tokens.set("abc.def").unwrap();
    let stage = BearerAuth::new(tokens);
    let mut request = ApiRequest::get("/job/all");

    stage.on_request(&mut request);

    assert_eq!(request.header("Authorization"), Some("Bearer abc.def"));
}
