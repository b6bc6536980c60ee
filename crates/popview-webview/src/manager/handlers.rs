//! Handler attachments shared by every surface.
//!
//! The same policy applies to the primary and to pop-ups: web URLs
//! load in place, anything else is suppressed and surfaced to the
//! shell as an event, and the window bridge reports open/close
//! requests over IPC.

use std::sync::{Arc, Mutex};

use popview_common::SurfaceId;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::classifier::is_web_url;
use crate::events::{PageLoadState, SurfaceEvent};
use crate::history::HistoryTracker;
use crate::ipc::BridgeMessage;

use super::SurfaceManager;

impl SurfaceManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<SurfaceEvent>>>,
        sid: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();
            let message = match BridgeMessage::from_json(&body) {
                Some(m) => m,
                None => {
                    warn!(%sid, body_len = body.len(), "IPC message rejected: not a bridge message");
                    return;
                }
            };

            let event = match message {
                BridgeMessage::OpenWindow { url, token } => {
                    debug!(%sid, url = %url, token = %token, "window.open requested");
                    SurfaceEvent::OpenWindowRequested {
                        opener: sid,
                        url,
                        token,
                    }
                }
                BridgeMessage::CloseWindow { token } => {
                    debug!(%sid, ?token, "window.close requested");
                    SurfaceEvent::CloseWindowRequested {
                        surface_id: sid,
                        token,
                    }
                }
            };
            if let Ok(mut evts) = events.lock() {
                evts.push(event);
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<SurfaceEvent>>>,
        sid: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%sid, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(SurfaceEvent::PageLoad {
                    surface_id: sid,
                    state,
                    url,
                });
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<SurfaceEvent>>>,
        sid: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(%sid, title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(SurfaceEvent::TitleChanged {
                    surface_id: sid,
                    title,
                });
            }
        })
    }

    /// Web URLs proceed (and are recorded in the history mirror);
    /// everything else is blocked here and handed to the shell for
    /// classification.
    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<SurfaceEvent>>>,
        sid: SurfaceId,
        history: Arc<HistoryTracker>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if is_web_url(&url) {
                history.record_navigation(&url);
                debug!(%sid, url = %url, "navigation allowed");
                return true;
            }

            debug!(%sid, url = %url, "non-web navigation intercepted");
            if let Ok(mut evts) = events.lock() {
                evts.push(SurfaceEvent::ExternalNavigation {
                    surface_id: sid,
                    url,
                });
            }
            false
        })
    }
}
