//! Best-effort mirror of a surface's session history.
//!
//! wry does not expose `canGoBack`, so each surface keeps a Rust-side
//! record of the top-level navigations its navigation handler allowed.
//! Going back is issued to the engine as `history.back()`; the tracker
//! is told first so the resulting navigation pops instead of pushes.
//! Redirects and `location.replace` are not distinguished, hence
//! best-effort.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct HistoryTracker {
    entries: Mutex<Vec<String>>,
    pending_back: AtomicBool,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a top-level navigation the engine is about to perform.
    /// If a back navigation was announced, this pops the current entry
    /// instead of pushing a new one.
    pub fn record_navigation(&self, url: &str) {
        let mut entries = self.entries.lock().unwrap();
        if self.pending_back.swap(false, Ordering::AcqRel) {
            entries.pop();
        } else {
            entries.push(url.to_string());
        }
    }

    /// Announce that the next observed navigation is a back step.
    pub fn will_go_back(&self) {
        self.pending_back.store(true, Ordering::Release);
    }

    /// Whether there is anywhere to go back to.
    pub fn can_go_back(&self) -> bool {
        self.entries.lock().unwrap().len() > 1
    }

    /// The most recently recorded URL.
    pub fn current(&self) -> Option<String> {
        self.entries.lock().unwrap().last().cloned()
    }

    pub fn depth(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
