//! Pipeline stages applied by `HttpGateway` to every call.
//!
//! DESIGN
//! ======
//! Stages see requests in pipeline order and outcomes in reverse order, the
//! way tower layers wrap a service. The 401 handling is a named stage whose
//! `teardown()` is also callable directly.

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::TransportError;
use super::gateway::{ApiRequest, ApiResponse, UNAUTHORIZED};
use super::navigator::{LOGIN_PATH, Navigator};
use super::token_store::TokenStore;

pub trait Middleware: Send + Sync {
    fn on_request(&self, request: &mut ApiRequest) {
        let _ = request;
    }

    fn on_response(&self, request: &ApiRequest, outcome: &Result<ApiResponse, TransportError>) {
        let _ = (request, outcome);
    }
}

/// Debug-level trace of each call. Never logs headers, so the token stays out.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestLog;

impl Middleware for RequestLog {
    fn on_request(&self, request: &mut ApiRequest) {
        log::debug!("api: {} {}", request.method.as_str(), request.path);
    }

    fn on_response(&self, request: &ApiRequest, outcome: &Result<ApiResponse, TransportError>) {
        match outcome {
            Ok(response) => log::debug!(
                "api: {} {} -> {}",
                request.method.as_str(),
                request.path,
                response.status
            ),
            Err(e) => log::warn!("api: {} {} failed: {e}", request.method.as_str(), request.path),
        }
    }
}

/// Attaches `Authorization: Bearer <token>` when a token is stored.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    tokens: TokenStore,
}

impl BearerAuth {
    pub fn new(tokens: TokenStore) -> Self {
        Self { tokens }
    }
}

impl Middleware for BearerAuth {
    fn on_request(&self, request: &mut ApiRequest) {
        if let Some(token) = self.tokens.get() {
            request.set_header("Authorization", format!("Bearer {token}"));
        }
    }
}

/// Global logout on any 401, whichever caller issued the request.
///
/// Clearing the store repeats harmlessly; the redirect is latched so a burst
/// of concurrent 401s navigates once. `rearm` releases the latch after a new
/// identity resolves.
pub struct SessionTeardown {
    tokens: TokenStore,
    navigator: Arc<dyn Navigator>,
    redirect_issued: AtomicBool,
}

impl SessionTeardown {
    pub fn new(tokens: TokenStore, navigator: Arc<dyn Navigator>) -> Self {
        Self { tokens, navigator, redirect_issued: AtomicBool::new(false) }
    }

    /// Clear the token and force navigation to the login entry point.
    pub fn teardown(&self) {
        self.tokens.clear();
        if self.redirect_issued.swap(true, Ordering::SeqCst) {
            log::debug!("session teardown: redirect already issued");
            return;
        }
        log::warn!("session teardown: server rejected credentials, redirecting to {LOGIN_PATH}");
        self.navigator.replace(LOGIN_PATH);
    }

    pub fn rearm(&self) {
        self.redirect_issued.store(false, Ordering::SeqCst);
    }

    pub fn redirect_issued(&self) -> bool {
        self.redirect_issued.load(Ordering::SeqCst)
    }
}

impl Middleware for SessionTeardown {
    fn on_response(&self, _request: &ApiRequest, outcome: &Result<ApiResponse, TransportError>) {
        if let Ok(response) = outcome {
            if response.status == UNAUTHORIZED {
                self.teardown();
            }
        }
    }
}
