//! Embedded web surfaces with pop-up and navigation-interception
//! support, built on the `wry` crate.
//!
//! - Surface lifecycle: one `SurfaceManager` creates the primary
//!   surface and every pop-up with identical policy
//! - Pop-up tracking: `PopupRegistry` holds live pop-ups in creation
//!   order; the window bridge (`ipc`) carries open/close requests
//! - Navigation interception: non-web URLs are blocked before load
//!   and classified (`classifier`, `intent`) so the shell can hand
//!   them to an OS application handler or a fallback URL
//! - Back routing: `back::press` unwinds pop-up history, pop-ups,
//!   then primary history before signalling exit

pub mod back;
pub mod classifier;
pub mod events;
pub mod history;
pub mod intent;
pub mod ipc;
pub mod manager;
pub mod registry;

pub use back::{press as back_press, BackAction, BackTarget};
pub use classifier::{classify, is_web_url, Classification, HandlerResolver, NavigationRequest};
pub use events::{PageLoadState, SurfaceEvent};
pub use intent::{IntentError, IntentUri};
pub use manager::{SurfaceConfig, SurfaceHandle, SurfaceManager};
pub use registry::PopupRegistry;
