//! Single egress point for every API call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages, the session, and the guards all reach the backend through
//! `HttpGateway::send`. Each request passes through the middleware pipeline
//! (`net::middleware`) before hitting the `Transport`, and each outcome passes
//! back through it in reverse before being classified into an `ApiError`.
//!
//! ERROR HANDLING
//! ==============
//! The gateway never swallows a failure. A 401 runs the session teardown
//! stage *and* is returned to the caller as `ApiError::Unauthorized`, so a
//! page may still show its own message.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, TransportError};
use super::middleware::{BearerAuth, Middleware, RequestLog, SessionTeardown};
use super::navigator::Navigator;
use super::token_store::TokenStore;

pub const UNAUTHORIZED: u16 = 401;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One named part of a multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file_name: String, content_type: String, bytes: Vec<u8> },
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

/// An outbound call before URL resolution; `path` is relative to the API base.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>, body: RequestBody) -> Self {
        Self { method, path: path.into(), headers: Vec::new(), body }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path, RequestBody::Empty)
    }

    pub fn post_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(Method::Post, path, RequestBody::Json(body))
    }

    pub fn post_multipart(path: impl Into<String>, parts: Vec<FormPart>) -> Self {
        Self::new(Method::Post, path, RequestBody::Multipart(parts))
    }

    /// Header lookup, case-insensitive on the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set a header, replacing any existing value under the same name.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
    }
}

/// A response of any status, with the body read as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Performs the actual network exchange for a prepared request.
///
/// Implementations return `Ok` for every response the server produced,
/// whatever its status; `Err` means no response arrived.
pub trait Transport: Send + Sync {
    fn send<'a>(&'a self, request: &'a ApiRequest) -> LocalBoxFuture<'a, Result<ApiResponse, TransportError>>;
}

/// Map a transport outcome into the caller-facing result.
///
/// # Errors
///
/// 401 becomes [`ApiError::Unauthorized`], other non-2xx statuses
/// [`ApiError::Status`], and transport failures [`ApiError::Network`].
pub fn classify(outcome: Result<ApiResponse, TransportError>) -> Result<ApiResponse, ApiError> {
    let response = outcome?;
    if response.is_success() {
        return Ok(response);
    }
    if response.status == UNAUTHORIZED {
        return Err(ApiError::Unauthorized { body: response.body });
    }
    Err(ApiError::Status { status: response.status, body: response.body })
}

#[derive(Clone)]
pub struct HttpGateway {
    transport: Arc<dyn Transport>,
    stages: Vec<Arc<dyn Middleware>>,
    teardown: Arc<SessionTeardown>,
}

impl HttpGateway {
    /// Gateway with the standard pipeline: request logging, bearer injection,
    /// and 401 session teardown.
    pub fn new(transport: Arc<dyn Transport>, tokens: TokenStore, navigator: Arc<dyn Navigator>) -> Self {
        let teardown = Arc::new(SessionTeardown::new(tokens.clone(), navigator));
        let stages: Vec<Arc<dyn Middleware>> =
            vec![Arc::new(RequestLog), Arc::new(BearerAuth::new(tokens)), teardown.clone()];
        Self { transport, stages, teardown }
    }

    /// Append a stage after the standard ones. It sees requests last and
    /// responses first.
    #[cfg(test)]
    #[must_use]
    pub fn with_stage(mut self, stage: Arc<dyn Middleware>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn teardown(&self) -> &SessionTeardown {
        &self.teardown
    }

    /// Run `request` through the pipeline and the transport.
    ///
    /// # Errors
    ///
    /// See [`classify`]. Response stages have already run when this returns.
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        for stage in &self.stages {
            stage.on_request(&mut request);
        }
        let outcome = self.transport.send(&request).await;
        for stage in self.stages.iter().rev() {
            stage.on_response(&request, &outcome);
        }
        classify(outcome)
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from [`Self::send`], or `Decode` on a body mismatch.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(ApiRequest::get(path)).await?.json()
    }

    /// `POST path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// `Encode` if `body` cannot be serialized, otherwise as [`Self::get_json`].
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(ApiRequest::post_json(path, value)).await?.json()
    }
}
