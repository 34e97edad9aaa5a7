//! Route-guard decisions shared by `RequireAuth` and `RequireRole`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical loading/redirect/deny behavior, so
//! the decision is a pure function of `SessionState` evaluated on every
//! render. Nothing is cached.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::state::session::SessionState;

pub use crate::net::navigator::LOGIN_PATH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving; render a placeholder and do not redirect.
    Pending,
    /// Resolved with no identity.
    RedirectToLogin,
    /// Signed in, but with the wrong role. Rendered in place.
    Denied,
    Render,
}

/// Decision for routes that need any signed-in user.
pub fn require_auth(state: &SessionState) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    match state.user {
        Some(_) => GuardDecision::Render,
        None => GuardDecision::RedirectToLogin,
    }
}

/// Decision for routes restricted to one role.
pub fn require_role(state: &SessionState, role: Role) -> GuardDecision {
    match require_auth(state) {
        GuardDecision::Render if !state.has_role(role) => GuardDecision::Denied,
        decision => decision,
    }
}

/// Whether a route should navigate to `/login` right now.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    require_auth(state) == GuardDecision::RedirectToLogin
}
