use std::sync::Arc;

use popview_common::SurfaceId;
use tracing::warn;
use wry::WebView;

use crate::back::BackTarget;
use crate::history::HistoryTracker;

/// Handle to a managed surface. Owns the underlying webview; dropping
/// the handle detaches and destroys it.
pub struct SurfaceHandle {
    pub(super) webview: WebView,
    pub(super) id: SurfaceId,
    /// Shared with the navigation handler, which records loads.
    pub(super) history: Arc<HistoryTracker>,
}

impl SurfaceHandle {
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// The most recent URL the navigation handler allowed
    /// (best-effort tracking).
    pub fn current_url(&self) -> Option<String> {
        self.history.current()
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.webview.load_url(url)
    }

    /// Execute JavaScript in the surface context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Set the surface bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the surface.
    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    /// Focus the surface.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// Get a reference to the underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}

impl BackTarget for SurfaceHandle {
    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn go_back(&mut self) {
        // Announce first so the navigation handler pops the entry the
        // engine is about to revisit.
        self.history.will_go_back();
        if let Err(e) = self.webview.evaluate_script("window.history.back();") {
            warn!(id = %self.id, error = %e, "failed to issue history.back()");
        }
    }
}
