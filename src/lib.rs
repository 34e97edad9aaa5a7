//! # jobboard-client
//!
//! Leptos + WASM frontend for the job board. Applicants browse and apply to
//! postings; hiring managers post jobs and review applications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The load-bearing part of this crate is the session layer: `net::token_store`
//! persists the bearer token, `net::gateway` is the single egress point for API
//! calls, `state::session` owns the resolved identity, and the guards in
//! `util::auth` / `util::apply_flow` gate navigation on it. Pages are thin
//! collaborators that read the session through context.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging, then mount the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use app::App;

    let config = config::ClientConfig::from_build_env();
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config.log_level).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    log::info!("starting jobboard client (api base: {:?})", config.api_base_url);
    leptos::mount::mount_to_body(move || leptos::view! { <App config=config.clone()/> });
}
