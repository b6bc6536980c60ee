//! Surface event dispatch: intercepted navigations, pop-up open/close,
//! and back routing.

use std::sync::Arc;

use popview_common::{Notice, SurfaceId};
use popview_webview::{
    back, classify, is_web_url, BackAction, Classification, NavigationRequest, SurfaceEvent,
    SurfaceHandle,
};
use tracing::{debug, info, warn};

use crate::notify;

use super::{full_bounds, HostShell};

impl HostShell {
    pub(super) fn pump_surface_events(&mut self) {
        for event in self.manager.drain_events() {
            match event {
                SurfaceEvent::ExternalNavigation { surface_id, url } => {
                    self.dispatch_navigation(surface_id, &url);
                }
                SurfaceEvent::OpenWindowRequested { opener, url, token } => {
                    self.open_popup(opener, &url, token);
                }
                SurfaceEvent::CloseWindowRequested { surface_id, token } => {
                    self.close_popup(surface_id, token);
                }
                SurfaceEvent::PageLoad {
                    surface_id,
                    state,
                    url,
                } => {
                    debug!(%surface_id, ?state, url = %url, "page load");
                }
                SurfaceEvent::TitleChanged { surface_id, title } => {
                    self.update_window_title(surface_id, &title);
                }
            }
        }
        self.flush_notices();
    }

    /// Act on an intercepted non-web navigation. The classifier is
    /// pure; all side effects happen here.
    fn dispatch_navigation(&mut self, surface_id: SurfaceId, raw: &str) {
        let request = NavigationRequest::parse(raw);
        match classify(&request, &self.launcher) {
            Classification::LoadDirectly => {
                // Not reached in practice: only non-web URLs are
                // intercepted, and those never classify as direct
                // loads. Loading in place keeps the arm harmless.
                if let Some(surface) = self.surface_mut(surface_id) {
                    if let Err(e) = surface.load_url(&request.url) {
                        warn!(%surface_id, error = %e, "direct load failed");
                    }
                }
            }
            Classification::DelegateToHandler(target) => match self.launcher.launch(&target) {
                Ok(()) => info!(url = %target, "delegated to external handler"),
                Err(e) => {
                    warn!(url = %target, error = %e, "external handler launch failed");
                    self.notices.push(Notice::warning(
                        "Popview",
                        "Could not launch an application for this link.",
                    ));
                }
            },
            Classification::LoadFallback(url) => {
                info!(%surface_id, fallback = %url, "loading fallback URL");
                match self.surface_mut(surface_id) {
                    Some(surface) => {
                        if let Err(e) = surface.load_url(&url) {
                            warn!(%surface_id, error = %e, "fallback load failed");
                        }
                    }
                    None => warn!(%surface_id, "fallback target surface is gone"),
                }
            }
            Classification::Unhandled => {
                info!(url = %raw, "no application handles this link");
                self.notices.push(Notice::info(
                    "Popview",
                    "No application available to open this link.",
                ));
            }
        }
    }

    /// Create a pop-up for a `window.open()` request and register it.
    /// The surface exists and is registered before the transport token
    /// becomes resolvable, so a proxy `close()` arriving immediately
    /// after still finds its target.
    fn open_popup(&mut self, opener: SurfaceId, url: &str, token: String) {
        let window = match &self.window {
            Some(w) => Arc::clone(w),
            None => {
                warn!(%opener, "cannot open popup: no window");
                return;
            }
        };

        let base = self.base_surface_config();
        let config = if is_web_url(url) {
            base.for_url(url)
        } else {
            base.blank()
        };

        let handle =
            match self
                .manager
                .create_surface(window.as_ref(), full_bounds(&window), &config)
            {
                Ok(h) => h,
                Err(e) => {
                    warn!(%opener, error = %e, "failed to create popup surface");
                    return;
                }
            };

        let id = handle.id();
        self.popups.insert(id, handle);
        self.transports.insert(token, id);
        info!(%opener, popup = %id, url = %url, "popup opened");

        // A non-web target starts blank and goes through the same
        // classification as any navigation, with the new popup as the
        // fallback target.
        if !is_web_url(url) {
            self.dispatch_navigation(id, url);
        }
    }

    /// Unregister a pop-up and drop it (dropping detaches). Closing an
    /// unknown or already-closed pop-up is a no-op.
    fn close_popup(&mut self, sender: SurfaceId, token: Option<String>) {
        let id = match token {
            Some(token) => match self.transports.remove(&token) {
                Some(id) => id,
                None => {
                    debug!(token = %token, "close for unknown transport token");
                    return;
                }
            },
            None => sender,
        };

        match self.popups.remove(id) {
            Some(popup) => {
                drop(popup);
                self.transports.retain(|_, target| *target != id);
                info!(popup = %id, "popup closed");
            }
            None => debug!(popup = %id, "popup already closed"),
        }
    }

    pub(super) fn press_back(&mut self) {
        let primary = match self.primary.as_mut() {
            Some(p) => p,
            None => {
                self.should_exit = true;
                return;
            }
        };

        match back::press(&mut self.popups, primary) {
            BackAction::PopupNavigatedBack(id) => debug!(popup = %id, "popup navigated back"),
            BackAction::PopupClosed(id) => {
                self.transports.retain(|_, target| *target != id);
                info!(popup = %id, "back press closed popup");
            }
            BackAction::PrimaryNavigatedBack => debug!("primary navigated back"),
            BackAction::Exit => {
                info!("back press with nothing to unwind, exiting");
                self.should_exit = true;
            }
        }
    }

    fn update_window_title(&mut self, surface_id: SurfaceId, title: &str) {
        let is_primary = self.primary.as_ref().is_some_and(|p| p.id() == surface_id);
        if !is_primary || title.is_empty() {
            return;
        }
        if let Some(window) = &self.window {
            window.set_title(title);
        }
    }

    fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut SurfaceHandle> {
        if self.primary.as_ref().is_some_and(|p| p.id() == id) {
            return self.primary.as_mut();
        }
        self.popups.get_mut(id)
    }

    fn flush_notices(&mut self) {
        for notice in self.notices.drain() {
            notify::show(&notice);
        }
    }
}
