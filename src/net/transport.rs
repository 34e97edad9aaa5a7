//! Concrete transports behind `HttpGateway`.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: a stub that fails every call, since the API is only reachable
//! from the browser bundle.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use futures::FutureExt as _;
use futures::future::LocalBoxFuture;

use super::error::TransportError;
use super::gateway::{ApiRequest, ApiResponse, Transport};

/// Response body text; a failed read is logged and treated as empty so the
/// status still reaches classification.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn body_or_empty<E: std::fmt::Display>(url: &str, read: Result<String, E>) -> String {
    match read {
        Ok(body) => body,
        Err(e) => {
            log::warn!("api: reading response body from {url} failed: {e}");
            String::new()
        }
    }
}

/// `fetch`-backed transport resolving paths against the API base URL.
#[cfg(feature = "csr")]
#[derive(Debug, Clone)]
pub struct BrowserTransport {
    base_url: String,
}

#[cfg(feature = "csr")]
impl BrowserTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[cfg(feature = "csr")]
impl Transport for BrowserTransport {
    fn send<'a>(&'a self, request: &'a ApiRequest) -> LocalBoxFuture<'a, Result<ApiResponse, TransportError>> {
        let url = crate::config::join_url(&self.base_url, &request.path);
        browser::send(url, request).boxed_local()
    }
}

#[cfg(feature = "csr")]
mod browser {
    use gloo_net::http::Request;

    use super::{ApiRequest, ApiResponse, TransportError};
    use crate::net::gateway::{FormPart, Method, RequestBody};

    fn transport_err(e: impl std::fmt::Display) -> TransportError {
        TransportError(e.to_string())
    }

    pub(super) async fn send(url: String, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(value),
            // The browser supplies the multipart boundary header itself.
            RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
        }
        .map_err(transport_err)?;

        let response = prepared.send().await.map_err(transport_err)?;
        let status = response.status();
        let body = super::body_or_empty(&url, response.text().await);
        Ok(ApiResponse { status, body })
    }

    fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, TransportError> {
        let js_err = |e: wasm_bindgen::JsValue| TransportError(format!("{e:?}"));
        let form = web_sys::FormData::new().map_err(js_err)?;
        for part in parts {
            match part {
                FormPart::Text { name, value } => form.append_with_str(name, value).map_err(js_err)?,
                FormPart::File { name, file_name, content_type, bytes } => {
                    let chunks = js_sys::Array::new();
                    chunks.push(&js_sys::Uint8Array::from(bytes.as_slice()));
                    let options = web_sys::BlobPropertyBag::new();
                    options.set_type(content_type);
                    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&chunks, &options)
                        .map_err(js_err)?;
                    form.append_with_blob_and_filename(name, &blob, file_name)
                        .map_err(js_err)?;
                }
            }
        }
        Ok(form)
    }
}

/// Transport for builds without a browser; every call fails as a network error.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableTransport;

impl Transport for UnavailableTransport {
    fn send<'a>(&'a self, request: &'a ApiRequest) -> LocalBoxFuture<'a, Result<ApiResponse, TransportError>> {
        let path = request.path.clone();
        async move { Err(TransportError(format!("{path}: not available outside the browser"))) }.boxed_local()
    }
}
