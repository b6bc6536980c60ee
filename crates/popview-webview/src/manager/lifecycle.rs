use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::history::HistoryTracker;
use crate::ipc::WINDOW_BRIDGE_SCRIPT;

use super::handle::SurfaceHandle;
use super::types::SurfaceConfig;
use super::SurfaceManager;

impl SurfaceManager {
    /// Create a new surface as a child of the given window.
    ///
    /// Pop-ups and the primary go through the same path, so every
    /// surface gets the window bridge and the same handler set.
    pub fn create_surface<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        window: &W,
        bounds: wry::Rect,
        config: &SurfaceConfig,
    ) -> Result<SurfaceHandle, wry::Error> {
        let sid = self.allocate_id();
        let events = Arc::clone(&self.events);
        let history = Arc::new(HistoryTracker::new());

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_focused(false)
            .with_initialization_script(WINDOW_BRIDGE_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), sid);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), sid);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), sid);
        builder =
            Self::attach_navigation_handler(builder, events, sid, Arc::clone(&history));

        let initial_url;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else {
            builder = builder.with_url("about:blank");
            initial_url = "about:blank".to_string();
        }

        let webview = builder.build_as_child(window)?;

        debug!(%sid, url = %initial_url, "surface created");

        Ok(SurfaceHandle {
            webview,
            id: sid,
            history,
        })
    }
}
