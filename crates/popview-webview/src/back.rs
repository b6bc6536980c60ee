//! Back-press routing.
//!
//! One back press produces exactly one action, chosen by a fixed
//! priority: the newest popup's own history first, then closing that
//! popup, then the primary surface's history, then app exit. Nested
//! popup navigation is fully exhausted before the popup closes, and
//! the primary's history before the app exits.

use popview_common::SurfaceId;
use tracing::debug;

use crate::registry::PopupRegistry;

/// The back-navigation capability a surface reports.
pub trait BackTarget {
    fn can_go_back(&self) -> bool;
    fn go_back(&mut self);
}

/// What a back press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// The newest popup stepped back in its own history.
    PopupNavigatedBack(SurfaceId),
    /// The newest popup had no history and was closed. The surface has
    /// already been removed from the registry and dropped.
    PopupClosed(SurfaceId),
    /// The primary surface stepped back.
    PrimaryNavigatedBack,
    /// Nothing left to unwind; the shell should exit.
    Exit,
}

/// Route one back press. Popups are taken most-recent-first (LIFO);
/// closing a popup consumes the press even when it cannot go back.
pub fn press<S: BackTarget>(popups: &mut PopupRegistry<S>, primary: &mut S) -> BackAction {
    let close_candidate = match popups.most_recent_mut() {
        Some((id, popup)) => {
            if popup.can_go_back() {
                popup.go_back();
                debug!(%id, "back press: popup navigated back");
                return BackAction::PopupNavigatedBack(id);
            }
            Some(id)
        }
        None => None,
    };

    if let Some(id) = close_candidate {
        popups.remove(id);
        debug!(%id, "back press: popup closed");
        return BackAction::PopupClosed(id);
    }

    if primary.can_go_back() {
        primary.go_back();
        debug!("back press: primary navigated back");
        return BackAction::PrimaryNavigatedBack;
    }

    BackAction::Exit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FakeSurface {
        depth: usize,
    }

    impl FakeSurface {
        fn with_depth(depth: usize) -> Self {
            Self { depth }
        }
    }

    impl BackTarget for FakeSurface {
        fn can_go_back(&self) -> bool {
            self.depth > 0
        }

        fn go_back(&mut self) {
            self.depth -= 1;
        }
    }

    fn id(raw: u32) -> SurfaceId {
        SurfaceId::new(raw)
    }

    #[test]
    fn popup_with_history_goes_back() {
        let mut popups = PopupRegistry::new();
        popups.insert(id(1), FakeSurface::with_depth(2));
        let mut primary = FakeSurface::with_depth(3);

        assert_eq!(
            press(&mut popups, &mut primary),
            BackAction::PopupNavigatedBack(id(1))
        );
        assert_eq!(popups.get_mut(id(1)).unwrap().depth, 1);
        // Primary untouched.
        assert_eq!(primary.depth, 3);
    }

    #[test]
    fn popup_without_history_is_closed() {
        let mut popups = PopupRegistry::new();
        popups.insert(id(1), FakeSurface::with_depth(0));
        let mut primary = FakeSurface::with_depth(3);

        assert_eq!(
            press(&mut popups, &mut primary),
            BackAction::PopupClosed(id(1))
        );
        assert!(popups.is_empty());
        assert_eq!(primary.depth, 3);
    }

    #[test]
    fn newest_popup_is_chosen_first() {
        let mut popups = PopupRegistry::new();
        popups.insert(id(1), FakeSurface::with_depth(5));
        popups.insert(id(2), FakeSurface::with_depth(0));
        let mut primary = FakeSurface::with_depth(0);

        // LIFO: popup 2 is newest and has no history, so it closes
        // even though popup 1 could navigate.
        assert_eq!(
            press(&mut popups, &mut primary),
            BackAction::PopupClosed(id(2))
        );
        assert_eq!(popups.len(), 1);
        assert!(popups.contains(id(1)));
    }

    #[test]
    fn presses_unwind_popups_then_primary_then_exit() {
        let mut popups = PopupRegistry::new();
        popups.insert(id(1), FakeSurface::with_depth(1));
        let mut primary = FakeSurface::with_depth(1);

        assert_eq!(
            press(&mut popups, &mut primary),
            BackAction::PopupNavigatedBack(id(1))
        );
        assert_eq!(
            press(&mut popups, &mut primary),
            BackAction::PopupClosed(id(1))
        );
        assert_eq!(
            press(&mut popups, &mut primary),
            BackAction::PrimaryNavigatedBack
        );
        assert_eq!(press(&mut popups, &mut primary), BackAction::Exit);
    }

    #[test]
    fn no_popups_primary_goes_back() {
        let mut popups: PopupRegistry<FakeSurface> = PopupRegistry::new();
        let mut primary = FakeSurface::with_depth(2);

        assert_eq!(
            press(&mut popups, &mut primary),
            BackAction::PrimaryNavigatedBack
        );
        assert_eq!(primary.depth, 1);
    }

    #[test]
    fn exhausted_everything_exits_once_per_press() {
        let mut popups: PopupRegistry<FakeSurface> = PopupRegistry::new();
        let mut primary = FakeSurface::with_depth(0);

        assert_eq!(press(&mut popups, &mut primary), BackAction::Exit);
        // State is unchanged; a second press reports Exit again.
        assert_eq!(press(&mut popups, &mut primary), BackAction::Exit);
    }
}
