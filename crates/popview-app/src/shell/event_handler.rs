//! winit event loop integration.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::{WindowAttributes, WindowId};

use popview_webview::SurfaceConfig;

use super::{full_bounds, HostShell, EVENT_POLL_INTERVAL};

impl ApplicationHandler for HostShell {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => std::sync::Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let surface_config = SurfaceConfig {
            url: Some(self.home_url.clone()),
            ..self.base_surface_config()
        };
        match self
            .manager
            .create_surface(window.as_ref(), full_bounds(&window), &surface_config)
        {
            Ok(handle) => {
                tracing::info!(id = %handle.id(), url = %self.home_url, "primary surface created");
                self.primary = Some(handle);
            }
            Err(e) => {
                tracing::error!("Failed to create primary surface: {e}");
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }
            WindowEvent::Resized(_) => self.sync_surface_bounds(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_keyboard_input(event),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }

        let now = Instant::now();
        if now.duration_since(self.last_poll) >= EVENT_POLL_INTERVAL {
            self.last_poll = now;
            self.pump_surface_events();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(
            Instant::now() + EVENT_POLL_INTERVAL,
        ));
    }
}

impl HostShell {
    /// Escape and the browser-back media key map to the hardware back
    /// signal of the original.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match event.logical_key {
            Key::Named(NamedKey::Escape) | Key::Named(NamedKey::BrowserBack) => {
                self.press_back();
            }
            _ => {}
        }
    }

    fn sync_surface_bounds(&mut self) {
        let window = match &self.window {
            Some(w) => w,
            None => return,
        };
        let bounds = full_bounds(window);

        if let Some(primary) = &self.primary {
            if let Err(e) = primary.set_bounds(bounds.clone()) {
                tracing::warn!(error = %e, "failed to resize primary surface");
            }
        }
        for (id, popup) in self.popups.iter() {
            if let Err(e) = popup.set_bounds(bounds.clone()) {
                tracing::warn!(popup = %id, error = %e, "failed to resize popup surface");
            }
        }
    }
}
