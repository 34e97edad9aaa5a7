//! Client configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so settings are read
//! with `option_env!` when the crate is compiled. The `parse_*` helpers take
//! the raw optional values so defaults can be tested without a build.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined onto every API path. Empty means same origin.
    pub api_base_url: String,
    /// `localStorage` key holding the bearer token.
    pub token_storage_key: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time variables.
    ///
    /// Optional:
    /// - `JOBBOARD_API_BASE_URL`: default same origin
    /// - `JOBBOARD_TOKEN_KEY`: default `token`
    /// - `JOBBOARD_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
    pub fn from_build_env() -> Self {
        Self::from_raw(
            option_env!("JOBBOARD_API_BASE_URL"),
            option_env!("JOBBOARD_TOKEN_KEY"),
            option_env!("JOBBOARD_LOG_LEVEL"),
        )
    }

    pub fn from_raw(base_url: Option<&str>, token_key: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base_url: parse_base_url(base_url),
            token_storage_key: parse_token_key(token_key),
            log_level: parse_log_level(log_level),
        }
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}

fn parse_token_key(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(key) if !key.is_empty() => key.to_owned(),
        _ => DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| value.trim().parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

// Endpoint paths appear both with and without a leading slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{path}")
    } else {
        format!("{base}/{path}")
    }
}
