//! Scrim Scroll Locking
//!
//! Keeps the page still behind a modal overlay. On standard hosts the page
//! is locked by hiding root overflow (deferred one UI tick); on touch-quirk
//! mobile browsers, where that does nothing, the designated overlay region
//! stays scrollable while gestures that would bleed past its edges are
//! suppressed.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use scrim_lock::prelude::*;
//!
//! struct Page;
//!
//! impl HostPage for Page {
//!     fn set_root_overflow(&self, _container: RootContainer, _overflow: Overflow) {
//!         // write the style to the real document here
//!     }
//! }
//!
//! let queue = Rc::new(TaskQueue::new());
//! let mut locks = ScrollLockController::new(
//!     PlatformCapabilities::standard(),
//!     Rc::new(Page),
//!     queue.clone(),
//! );
//!
//! // A dialog opens: lock the page behind it
//! locks.disable_body_scroll(None);
//! queue.run_pending(); // host's next UI tick
//!
//! // The dialog closes
//! locks.clear_all_body_scroll_locks();
//! queue.run_pending();
//! ```
//!
//! On a touch-quirk host the same controller registers the overlay's
//! scrollable region instead, and the host forwards that region's touch
//! events through [`ScrollLockController::handle_touch`], honoring the
//! returned [`TouchResponse`].

pub mod controller;
pub mod gesture;

// Controller API
pub use controller::ScrollLockController;
pub use gesture::{ExemptRegion, ExemptRegistry, GesturePhase, TouchGesture};

// Host seams consumed by the controller
pub use scrim_platform::{
    HostPage, Overflow, Platform, PlatformCapabilities, PlatformError, RegionId, RootContainer,
    ScrollMetrics, ScrollRegion, SharedHostPage, SharedScrollRegion, SharedUiScheduler, TaskQueue,
    TouchEvent, TouchPhase, TouchPoint, TouchResponse, UiScheduler, UiTask,
};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::controller::ScrollLockController;
    pub use crate::gesture::{GesturePhase, TouchGesture};
    pub use scrim_platform::prelude::*;
}
