use super::*;
use crate::net::types::UserProfile;

fn state(role: Option<Role>, loading: bool) -> SessionState {
    SessionState {
        user: role.map(|role| UserProfile { id: "u1".to_owned(), email: "u1@x.com".to_owned(), role }),
        loading,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&state(None, false)));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&state(None, true)));
    assert_eq!(require_auth(&state(None, true)), GuardDecision::Pending);
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&state(Some(Role::Applicant), false)));
    assert_eq!(require_auth(&state(Some(Role::Applicant), false)), GuardDecision::Render);
}

#[test]
fn require_role_pending_while_loading_even_with_stale_user() {
    assert_eq!(require_role(&state(Some(Role::HiringManager), true), Role::HiringManager), GuardDecision::Pending);
}

#[test]
fn require_role_redirects_when_signed_out() {
    assert_eq!(require_role(&state(None, false), Role::HiringManager), GuardDecision::RedirectToLogin);
}

#[test]
fn require_role_renders_only_matching_role() {
    assert_eq!(require_role(&state(Some(Role::HiringManager), false), Role::HiringManager), GuardDecision::Render);
    assert_eq!(require_role(&state(Some(Role::Applicant), false), Role::Applicant), GuardDecision::Render);
}

#[test]
fn require_role_denies_in_place_for_other_role() {
    let decision = require_role(&state(Some(Role::Applicant), false), Role::HiringManager);
    assert_eq!(decision, GuardDecision::Denied);
    assert_ne!(decision, GuardDecision::RedirectToLogin);
}

#[test]
fn guard_only_redirects_after_resolution_over_a_bootstrap_sequence() {
    // Loading window, then resolved empty.
    let sequence = [state(None, true), state(None, true), state(None, false)];
    let redirects: Vec<bool> = sequence.iter().map(should_redirect_unauth).collect();
    assert_eq!(redirects, vec![false, false, true]);
}

#[test]
fn role_decision_follows_every_session_write() {
    let sequence = [
        state(Some(Role::HiringManager), false),
        state(Some(Role::HiringManager), true),
        state(Some(Role::Applicant), false),
        state(None, false),
    ];
    let decisions: Vec<GuardDecision> = sequence.iter().map(|s| require_role(s, Role::HiringManager)).collect();
    assert_eq!(
        decisions,
        vec![GuardDecision::Render, GuardDecision::Pending, GuardDecision::Denied, GuardDecision::RedirectToLogin]
    );
}
