//! Navigation side effects issued outside the router.
//!
//! The gateway has no access to the Leptos router when a 401 arrives, so the
//! forced redirect goes through this seam instead.

/// Login entry point; every unauthenticated redirect lands here.
pub const LOGIN_PATH: &str = "/login";

/// Forces client navigation to `path`, replacing the current history entry.
pub trait Navigator: Send + Sync {
    fn replace(&self, path: &str);
}

/// Hard navigation through `window.location`.
///
/// A redirect to the page already showing is skipped, so a 401 answered on the
/// login form does not reload it and wipe the form's own error message.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

#[cfg(feature = "csr")]
impl Navigator for BrowserNavigator {
    fn replace(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if location.pathname().ok().as_deref() == Some(path) {
            log::debug!("navigator: already at {path}, skipping redirect");
            return;
        }
        if location.replace(path).is_err() {
            log::warn!("navigator: location.replace({path}) failed");
        }
    }
}

/// Navigator for builds without a browser; records nothing, logs the target.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedNavigator;

impl Navigator for DetachedNavigator {
    fn replace(&self, path: &str) {
        log::debug!("navigator: no browser, dropping redirect to {path}");
    }
}
