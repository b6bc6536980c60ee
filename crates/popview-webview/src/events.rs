//! Surface event types.
//!
//! Handlers registered on each webview push these into a shared sink;
//! the shell drains them on the UI event loop and reacts. Nothing in
//! a handler mutates shell state directly.

use popview_common::SurfaceId;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a rendering surface.
#[derive(Debug, Clone)]
pub enum SurfaceEvent {
    /// Page load state changed.
    PageLoad {
        surface_id: SurfaceId,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged {
        surface_id: SurfaceId,
        title: String,
    },
    /// A non-web navigation was intercepted before load. The load was
    /// suppressed; the shell must classify and act.
    ExternalNavigation {
        surface_id: SurfaceId,
        url: String,
    },
    /// In-page script called `window.open()`. The transport token was
    /// minted by the opener's bridge and identifies the proxy handle
    /// already returned to script.
    OpenWindowRequested {
        opener: SurfaceId,
        url: String,
        token: String,
    },
    /// In-page script asked for a window to close: its own
    /// (`token: None`) or one it opened (`token` from the proxy).
    CloseWindowRequested {
        surface_id: SurfaceId,
        token: Option<String>,
    },
}
