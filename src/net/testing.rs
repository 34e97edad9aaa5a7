//! Test doubles for the transport and navigation seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::FutureExt as _;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use super::error::TransportError;
use super::gateway::{ApiRequest, ApiResponse, HttpGateway, Transport};
use super::navigator::Navigator;
use super::token_store::TokenStore;

pub fn ok_json(body: serde_json::Value) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse { status: 200, body: body.to_string() })
}

pub fn status(status: u16) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse { status, body: r#"{"detail":"scripted failure"}"#.to_owned() })
}

pub fn offline() -> Result<ApiResponse, TransportError> {
    Err(TransportError("offline".to_owned()))
}

/// Replays queued outcomes in order and records every request it saw.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    seen: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new(outcomes: Vec<Result<ApiResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self { outcomes: Mutex::new(outcomes.into()), seen: Mutex::default() })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl Transport for ScriptedTransport {
    fn send<'a>(&'a self, request: &'a ApiRequest) -> LocalBoxFuture<'a, Result<ApiResponse, TransportError>> {
        self.seen.lock().unwrap().push(request.clone());
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError(format!("no scripted outcome for {}", request.path))));
        async move { outcome }.boxed_local()
    }
}

/// Holds every request open until the test releases it, so several calls can
/// be in flight at once.
#[derive(Default)]
pub struct GatedTransport {
    pending: Mutex<Vec<oneshot::Sender<Result<ApiResponse, TransportError>>>>,
}

impl GatedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn in_flight(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Resolve every open request with a copy of `outcome`.
    pub fn release_all(&self, outcome: &Result<ApiResponse, TransportError>) {
        for tx in self.pending.lock().unwrap().drain(..) {
            let _ = tx.send(outcome.clone());
        }
    }
}

impl Transport for GatedTransport {
    fn send<'a>(&'a self, _request: &'a ApiRequest) -> LocalBoxFuture<'a, Result<ApiResponse, TransportError>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push(tx);
        async move { rx.await.unwrap_or_else(|_| Err(TransportError("gate dropped".to_owned()))) }.boxed_local()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}

/// Gateway wired to the given doubles with an in-memory token store.
pub fn gateway(transport: Arc<dyn Transport>, navigator: Arc<RecordingNavigator>) -> (HttpGateway, TokenStore) {
    let tokens = TokenStore::in_memory("token");
    (HttpGateway::new(transport, tokens.clone(), navigator), tokens)
}
