//! Wire DTOs for the job-board REST API.
//!
//! DESIGN
//! ======
//! The backend is loose about scalar types: ids arrive as numbers or UUID
//! strings, and `has_applied` as a bool, an integer, or not at all. The
//! deserializers here normalize those shapes once so the session and guard
//! code can work with plain Rust types.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role, fixed at signup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Applicant,
    HiringManager,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applicant => "applicant",
            Self::HiringManager => "hiring_manager",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    pub role: Role,
}

/// Credentials exchanged at `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account creation payload for `/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Bearer token issued by `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// A job posting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub salary: Option<String>,
    #[serde(default, alias = "postedAt")]
    pub posted_at: Option<String>,
    /// Applicant-scoped; authoritative only at fetch time.
    #[serde(default, deserialize_with = "deserialize_boolish")]
    pub has_applied: bool,
}

/// Payload for `/job/post_job`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub location: String,
    /// Digits only; `null` when left blank.
    pub salary: Option<String>,
}

/// A submitted application, as seen by its applicant or a hiring manager.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub job_id: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default, alias = "cv_url")]
    pub cv_download_url: Option<String>,
}

impl Application {
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("pending")
    }
}

/// An uploaded CV. Bytes are read from the file input by the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CvFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart fields for `applications/apply/{job_id}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cover_letter: Option<String>,
    pub cv: CvFile,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        _ => Err(D::Error::custom("expected string, number, or null")),
    }
}

fn deserialize_boolish<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        serde_json::Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" | "" => Ok(false),
            other => Err(D::Error::custom(format!("unrecognized boolean {other:?}"))),
        },
        _ => Err(D::Error::custom("expected boolean-compatible value")),
    }
}
