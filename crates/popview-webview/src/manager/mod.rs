//! Surface lifecycle management.
//!
//! `SurfaceManager` creates `wry::WebView` instances (the primary
//! surface and every pop-up) with one shared handler policy, and owns
//! the event sink the shell drains on the UI loop.

use std::sync::{Arc, Mutex};

use popview_common::SurfaceIdAllocator;

use crate::events::SurfaceEvent;

mod handle;
mod handlers;
mod lifecycle;
mod types;

pub use handle::SurfaceHandle;
pub use types::SurfaceConfig;

pub struct SurfaceManager {
    /// Event sink. Handlers push here, the shell drains on the loop.
    pub(crate) events: Arc<Mutex<Vec<SurfaceEvent>>>,
    ids: SurfaceIdAllocator,
}

impl SurfaceManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            ids: SurfaceIdAllocator::new(),
        }
    }

    /// Drain all pending surface events.
    pub fn drain_events(&self) -> Vec<SurfaceEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }

    pub(crate) fn allocate_id(&mut self) -> popview_common::SurfaceId {
        self.ids.allocate()
    }
}

impl Default for SurfaceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use popview_common::SurfaceId;

    #[test]
    fn drain_empties_the_sink() {
        let manager = SurfaceManager::new();
        manager
            .events
            .lock()
            .unwrap()
            .push(SurfaceEvent::ExternalNavigation {
                surface_id: SurfaceId::new(0),
                url: "intent://x#Intent;end".into(),
            });

        assert_eq!(manager.drain_events().len(), 1);
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn ids_allocate_sequentially() {
        let mut manager = SurfaceManager::new();
        assert_eq!(manager.allocate_id(), SurfaceId::new(0));
        assert_eq!(manager.allocate_id(), SurfaceId::new(1));
    }
}
