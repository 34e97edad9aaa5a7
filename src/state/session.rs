//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Session` handle is created by `App` and provided through context. It
//! is the only owner of the resolved identity: route guards and user-aware
//! pages read `state()`, and `bootstrap`/`login`/`logout` are the only writers.
//!
//! ORDERING
//! ========
//! `user` is meaningful only once `loading` is false. Within `login`, the
//! token write completes before the identity call is issued, so `/auth/me` is
//! always sent with the new token. Every `login` and `logout` starts a new
//! generation; an identity answer that arrives after the generation moved on,
//! or after the token was torn down, is discarded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::gateway::HttpGateway;
use crate::net::token_store::{TokenError, TokenStore};
use crate::net::types::{Role, UserProfile};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Unresolved: nothing is known until `bootstrap` finishes.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    fn resolved(user: Option<UserProfile>) -> Self {
        Self { user, loading: false }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("could not resolve identity: {0}")]
    Identity(#[from] ApiError),
    #[error("session changed while the identity request was in flight")]
    Superseded,
}

impl SessionError {
    /// Message for the login form to show.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Token(e) => e.to_string(),
            Self::Identity(e) => e.user_message(fallback),
            Self::Superseded => fallback.to_owned(),
        }
    }
}

/// Handle to the process-wide session. Clones share the same state.
#[derive(Clone)]
pub struct Session {
    state: RwSignal<SessionState>,
    tokens: TokenStore,
    gateway: HttpGateway,
    bootstrapped: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

impl Session {
    /// `tokens` must be the same store `gateway` injects from and tears down.
    pub fn new(tokens: TokenStore, gateway: HttpGateway) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            tokens,
            gateway,
            bootstrapped: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Reactive, read-only view of the session for guards and pages.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current value without subscribing.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn gateway(&self) -> &HttpGateway {
        &self.gateway
    }

    fn resolve(&self, user: Option<UserProfile>) {
        if user.is_some() {
            self.gateway.teardown().rearm();
        }
        self.state.set(SessionState::resolved(user));
    }

    fn advance(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Resolve any token persisted by a previous page load. Runs once per
    /// handle; later calls return immediately.
    pub async fn bootstrap(&self) {
        if self.bootstrapped.swap(true, Ordering::SeqCst) {
            log::debug!("session: bootstrap already ran");
            return;
        }
        if self.tokens.get().is_none() {
            log::info!("session: no stored token, starting anonymous");
            self.resolve(None);
            return;
        }
        let generation = self.generation.load(Ordering::SeqCst);
        let outcome = api::me(&self.gateway).await;
        if !self.is_current(generation) {
            log::debug!("session: bootstrap answer discarded, session changed meanwhile");
            return;
        }
        match outcome {
            Ok(profile) => {
                log::info!("session: restored user {} ({})", profile.id, profile.role);
                self.resolve(Some(profile));
            }
            Err(e) => {
                log::warn!("session: stored token rejected ({e}), clearing");
                self.tokens.clear();
                self.resolve(None);
            }
        }
    }

    /// Store `token` and resolve its identity.
    ///
    /// Post-login navigation is the caller's job. On identity failure the
    /// token stays stored and the session resolves anonymous; a 401 will have
    /// cleared it through the gateway already.
    ///
    /// # Errors
    ///
    /// [`SessionError::Token`] for an empty token (nothing is written),
    /// [`SessionError::Identity`] when `/auth/me` fails, or
    /// [`SessionError::Superseded`] when a `logout`, a newer `login`, or a 401
    /// teardown happened while `/auth/me` was in flight.
    pub async fn login(&self, token: &str) -> Result<UserProfile, SessionError> {
        self.state.update(|s| s.loading = true);
        if let Err(e) = self.tokens.set(token) {
            self.state.update(|s| s.loading = false);
            return Err(e.into());
        }
        let generation = self.advance();
        let outcome = api::me(&self.gateway).await;
        if !self.is_current(generation) {
            log::info!("session: login answer discarded, session changed meanwhile");
            return Err(SessionError::Superseded);
        }
        match outcome {
            Ok(profile) if self.tokens.get().as_deref() == Some(token) => {
                log::info!("session: logged in as {} ({})", profile.id, profile.role);
                self.resolve(Some(profile.clone()));
                Ok(profile)
            }
            Ok(_) => {
                log::info!("session: token torn down during login, staying anonymous");
                self.resolve(None);
                Err(SessionError::Superseded)
            }
            Err(e) => {
                log::warn!("session: identity lookup after login failed: {e}");
                self.resolve(None);
                Err(e.into())
            }
        }
    }

    /// Drop the token and identity. Always succeeds; repeat calls are no-ops.
    pub fn logout(&self) {
        self.advance();
        self.tokens.clear();
        if self.state.get_untracked() != SessionState::resolved(None) {
            log::info!("session: logged out");
            self.state.set(SessionState::resolved(None));
        }
    }
}

/// Build the platform session from config: `localStorage` + `fetch` in the
/// browser, memory + an unavailable transport elsewhere.
pub fn platform_session(config: &crate::config::ClientConfig) -> Session {
    use crate::net::navigator::Navigator;
    use crate::net::gateway::Transport;

    let tokens = TokenStore::for_platform(config.token_storage_key.clone());
    #[cfg(feature = "csr")]
    let (transport, navigator): (Arc<dyn Transport>, Arc<dyn Navigator>) = (
        Arc::new(crate::net::transport::BrowserTransport::new(config.api_base_url.clone())),
        Arc::new(crate::net::navigator::BrowserNavigator),
    );
    #[cfg(not(feature = "csr"))]
    let (transport, navigator): (Arc<dyn Transport>, Arc<dyn Navigator>) = (
        Arc::new(crate::net::transport::UnavailableTransport),
        Arc::new(crate::net::navigator::DetachedNavigator),
    );
    let gateway = HttpGateway::new(transport, tokens.clone(), navigator);
    Session::new(tokens, gateway)
}
