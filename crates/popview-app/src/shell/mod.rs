//! The host shell: owns the window and the primary surface, tracks
//! pop-ups, and composes navigation classification, pop-up lifecycle,
//! and back routing. The only module touching winit.

mod dispatch;
mod event_handler;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::window::Window;

use popview_common::{NoticeQueue, SurfaceId};
use popview_config::PopviewConfig;
use popview_webview::{PopupRegistry, SurfaceConfig, SurfaceHandle, SurfaceManager};

use crate::launcher::SystemLauncher;

/// How often to drain surface events while the loop is idle.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(16);

pub struct HostShell {
    config: PopviewConfig,
    home_url: String,
    devtools: bool,

    window: Option<Arc<Window>>,
    manager: SurfaceManager,
    primary: Option<SurfaceHandle>,
    popups: PopupRegistry<SurfaceHandle>,
    /// Transport token -> popup id, for opener-proxy closes.
    transports: HashMap<String, SurfaceId>,

    launcher: SystemLauncher,
    notices: NoticeQueue,

    should_exit: bool,
    last_poll: Instant,
}

impl HostShell {
    pub fn new(config: PopviewConfig, home_url: String, devtools: bool) -> Self {
        Self {
            config,
            home_url,
            devtools,
            window: None,
            manager: SurfaceManager::new(),
            primary: None,
            popups: PopupRegistry::new(),
            transports: HashMap::new(),
            launcher: SystemLauncher::new(),
            notices: NoticeQueue::default(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// Shared surface policy; pop-ups are configured identically to
    /// the primary apart from their URL.
    fn base_surface_config(&self) -> SurfaceConfig {
        SurfaceConfig {
            url: None,
            user_agent: Some(self.config.startup.user_agent.clone()),
            devtools: self.devtools,
        }
    }

    /// Drop every pop-up, then the primary. Dropping a handle detaches
    /// its webview from the window.
    fn shutdown(&mut self) {
        let popups = self.popups.drain_all();
        if !popups.is_empty() {
            tracing::info!(count = popups.len(), "closing pop-ups on shutdown");
        }
        drop(popups);
        self.transports.clear();
        self.primary = None;
    }
}

/// Every surface covers the window's full client area, like the
/// original single-container layout.
fn full_bounds(window: &Window) -> wry::Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(size.width, size.height)),
    }
}
