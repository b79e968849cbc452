//! Hard (full page load) navigation.
//!
//! The HTTP layer has no router handle, so auth-failure redirects go through
//! `window.location`. The reload also rebuilds in-memory state from storage.

/// Forces the browser to a new location outside the client-side router.
pub trait Navigator: Send + Sync {
    fn hard_redirect(&self, path: &str);
}

/// Sets `window.location.href`. No-op outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(path).is_err() {
                    log::warn!("failed to redirect to {path}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}
