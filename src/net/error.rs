//! Failure taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! `Unauthorized` has already triggered the gateway's global teardown by the
//! time a caller sees it. Everything else is local to the calling page, which
//! turns it into a message with `user_message`/`field_errors`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("network error: {0}")]
pub struct TransportError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("session is no longer valid")]
    Unauthorized { body: String },
    #[error("request failed: {status}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Network(#[from] TransportError),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    fn body_json(&self) -> Option<serde_json::Value> {
        match self {
            Self::Unauthorized { body } | Self::Status { body, .. } => serde_json::from_str(body).ok(),
            Self::Network(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }

    /// Server-provided `detail` (or `message`) string, if the body carries one.
    pub fn detail(&self) -> Option<String> {
        let body = self.body_json()?;
        if let Some(detail) = body.get("detail").and_then(serde_json::Value::as_str) {
            return Some(detail.to_owned());
        }
        body.get("message").and_then(|message| match message {
            serde_json::Value::String(text) => Some(text.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        })
    }

    /// Per-field validation messages from an object-shaped `detail` or `errors`.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        let Some(body) = self.body_json() else {
            return BTreeMap::new();
        };
        let fields = body
            .get("detail")
            .and_then(serde_json::Value::as_object)
            .or_else(|| body.get("errors").and_then(serde_json::Value::as_object));
        let Some(fields) = fields else {
            return BTreeMap::new();
        };
        fields
            .iter()
            .map(|(field, value)| (field.clone(), flatten_messages(value)))
            .collect()
    }

    /// Message for a page to show: `detail`, then field errors, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(detail) = self.detail() {
            return detail;
        }
        let fields = self.field_errors();
        if !fields.is_empty() {
            return fields.into_values().collect::<Vec<_>>().join(" ");
        }
        fallback.to_owned()
    }
}

fn flatten_messages(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(flatten_messages)
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}
