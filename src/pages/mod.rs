//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Input checks and message selection are plain functions
//! next to the page so they can be tested without a browser.

pub mod application;
pub mod applications;
pub mod apply_job;
pub mod jobs;
pub mod login;
pub mod post_job;
pub mod signup;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_params_map;

use crate::util::lifetime::ViewLifetime;

/// Navigation that replaces the current history entry.
pub(crate) fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// The `:job_id` route segment.
pub(crate) fn use_job_id() -> Memo<Option<String>> {
    let params = use_params_map();
    Memo::new(move |_| params.read().get("job_id"))
}

/// Spawn `load` and hand its output to `apply` unless the current owner has
/// been cleaned up by then. Call from inside an effect.
pub(crate) fn spawn_scoped<T, F>(load: F, apply: impl FnOnce(T) + 'static)
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    let lifetime = ViewLifetime::scoped();
    leptos::task::spawn_local(async move {
        let value = load.await;
        if !lifetime.apply(value, apply) {
            log::debug!("page: view went away, dropping load result");
        }
    });
}
