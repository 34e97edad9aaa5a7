//! Liveness flag for async work started by a view.
//!
//! A late response must not write into a view that has unmounted (or whose
//! route params changed). The flag is cancelled from `on_cleanup` and checked
//! before results are applied; the network call itself still completes.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct ViewLifetime {
    cancelled: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Run `apply` unless the view has gone away. Returns whether it ran.
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_cancelled() {
            return false;
        }
        apply(value);
        true
    }

    /// Flag tied to the current reactive owner: cancelled when it cleans up
    /// (unmount, or the enclosing effect re-running).
    pub fn scoped() -> Self {
        let lifetime = Self::new();
        let on_drop = lifetime.clone();
        leptos::prelude::on_cleanup(move || on_drop.cancel());
        lifetime
    }
}
