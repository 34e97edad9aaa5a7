use super::*;
use futures::executor::block_on;

#[test]
fn body_read_failure_yields_empty_body() {
    assert_eq!(body_or_empty("/auth/me", Err::<String, _>("stream aborted")), "");
}

#[test]
fn body_read_success_passes_text_through() {
    assert_eq!(body_or_empty::<String>("/job/all", Ok("[]".to_owned())), "[]");
}

#[test]
fn unavailable_transport_fails_as_network_error() {
    let err = block_on(UnavailableTransport.send(&ApiRequest::get("/job/all"))).unwrap_err();
    assert!(err.0.contains("/job/all"));
}
