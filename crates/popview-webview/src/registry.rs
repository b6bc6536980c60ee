//! Registry of live pop-up surfaces.
//!
//! Insertion order is creation order, which the back controller relies
//! on for LIFO selection. Generic over the surface type so the
//! lifecycle rules are testable without a live webview.

use popview_common::SurfaceId;
use tracing::warn;

pub struct PopupRegistry<S> {
    entries: Vec<(SurfaceId, S)>,
}

impl<S> PopupRegistry<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a surface. A surface id appears at most once: an
    /// insert under an existing id replaces the old surface in place.
    pub fn insert(&mut self, id: SurfaceId, surface: S) {
        if let Some(slot) = self.entries.iter_mut().find(|(sid, _)| *sid == id) {
            warn!(%id, "popup re-registered, replacing previous surface");
            slot.1 = surface;
        } else {
            self.entries.push((id, surface));
        }
    }

    /// Unregister a surface and hand it back so the caller controls
    /// detach (dropping a wry handle detaches it). Removing an absent
    /// id is a no-op, not an error.
    pub fn remove(&mut self, id: SurfaceId) -> Option<S> {
        let index = self.entries.iter().position(|(sid, _)| *sid == id)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains(&self, id: SurfaceId) -> bool {
        self.entries.iter().any(|(sid, _)| *sid == id)
    }

    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut S> {
        self.entries
            .iter_mut()
            .find(|(sid, _)| *sid == id)
            .map(|(_, s)| s)
    }

    /// The most recently created popup.
    pub fn most_recent(&self) -> Option<(SurfaceId, &S)> {
        self.entries.last().map(|(id, s)| (*id, s))
    }

    pub fn most_recent_mut(&mut self) -> Option<(SurfaceId, &mut S)> {
        self.entries.last_mut().map(|(id, s)| (*id, s))
    }

    /// Iterate in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &S)> {
        self.entries.iter().map(|(id, s)| (*id, s))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SurfaceId, &mut S)> {
        self.entries.iter_mut().map(|(id, s)| (*id, s))
    }

    /// Remove everything, in creation order. Used at shell teardown.
    pub fn drain_all(&mut self) -> Vec<(SurfaceId, S)> {
        std::mem::take(&mut self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S> Default for PopupRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
