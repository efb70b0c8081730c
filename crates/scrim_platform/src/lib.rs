//! Scrim Host Abstraction Layer
//!
//! This crate provides host-agnostic traits and types for the pieces of a
//! browser-like environment that scroll locking touches: touch input,
//! scrollable regions, root overflow styling, and next-tick scheduling.
//!
//! # Architecture
//!
//! The abstraction is built around four seams, each supplied by the host:
//!
//! - [`Platform`] - capability probe, queried once at startup
//! - [`ScrollRegion`] - a scrollable region's current scroll metrics
//! - [`HostPage`] - overflow mutation on the page's root scroll containers
//! - [`UiScheduler`] - deferred execution on the next UI tick
//!
//! The controller in `scrim_lock` consumes all four and owns no host
//! resources of its own.

mod error;
mod input;
mod page;
mod platform;
mod region;
mod scheduler;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use input::{TouchEvent, TouchPhase, TouchPoint, TouchResponse};
pub use page::{HostPage, Overflow, RootContainer, SharedHostPage};
pub use platform::{Platform, PlatformCapabilities};
pub use region::{RegionId, ScrollMetrics, ScrollRegion, SharedScrollRegion};
pub use scheduler::{SharedUiScheduler, TaskQueue, UiScheduler, UiTask};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::input::{TouchEvent, TouchPhase, TouchPoint, TouchResponse};
    pub use crate::page::{HostPage, Overflow, RootContainer, SharedHostPage};
    pub use crate::platform::{Platform, PlatformCapabilities};
    pub use crate::region::{RegionId, ScrollMetrics, ScrollRegion, SharedScrollRegion};
    pub use crate::scheduler::{SharedUiScheduler, TaskQueue, UiScheduler, UiTask};
}
