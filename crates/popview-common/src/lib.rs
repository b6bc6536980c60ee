//! Shared types for the Popview workspace: error enums, surface
//! identifiers, and the user-notice queue. This crate has no UI or
//! webview dependencies so the core logic crates stay testable.

pub mod errors;
pub mod id;
pub mod notice;

pub use errors::{ConfigError, LaunchError, PopviewError};
pub use id::{SurfaceId, SurfaceIdAllocator};
pub use notice::{Notice, NoticeLevel, NoticeQueue};
