//! The scroll lock controller
//!
//! One controller is constructed per application and passed by reference
//! to the overlay code that opens and closes scrims. The lock strategy is
//! picked once, at construction, from the platform capability probe:
//!
//! - **Overflow strategy** (standard hosts): locking defers a write of
//!   `overflow: hidden` to both root scroll containers on the next UI
//!   tick; unlocking restores `auto` the same way. The first target
//!   passed to a lock call becomes the primary locked region, and only a
//!   matching unlock (or a full clear) releases the page.
//! - **Gesture strategy** (touch-quirk hosts): overflow styling is left
//!   alone. Locking registers the target as an exempt region and arms
//!   per-gesture suppression for it; the host forwards touch events via
//!   [`ScrollLockController::handle_touch`] and honors the verdict.

use std::rc::Rc;

use scrim_platform::{
    Overflow, Platform, PlatformCapabilities, PlatformError, RegionId, RootContainer,
    SharedHostPage, SharedScrollRegion, SharedUiScheduler, TouchEvent, TouchResponse,
};

use crate::gesture::{ExemptRegistry, GesturePhase, TouchGesture};

// ============================================================================
// Lock Strategy
// ============================================================================

/// Strategy selected once from the capability probe
enum LockStrategy {
    /// Defer overflow writes to the root containers
    Overflow {
        page: SharedHostPage,
        scheduler: SharedUiScheduler,
    },
    /// Suppress edge-bleeding gestures on exempt regions
    Gesture {
        registry: ExemptRegistry,
        gesture: TouchGesture,
    },
}

impl LockStrategy {
    fn name(&self) -> &'static str {
        match self {
            LockStrategy::Overflow { .. } => "overflow",
            LockStrategy::Gesture { .. } => "gesture",
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Locks and unlocks page scrolling behind modal overlays
///
/// All operations are total: absent targets, unknown targets, and
/// redundant calls are silent no-ops.
pub struct ScrollLockController {
    /// Identity of the first lock target since the last release
    primary: Option<RegionId>,
    /// Platform-selected lock strategy
    strategy: LockStrategy,
}

impl ScrollLockController {
    /// Create a controller with already-resolved capabilities
    pub fn new(
        capabilities: PlatformCapabilities,
        page: SharedHostPage,
        scheduler: SharedUiScheduler,
    ) -> Self {
        let strategy = if capabilities.touch_scroll_quirk {
            LockStrategy::Gesture {
                registry: ExemptRegistry::new(),
                gesture: TouchGesture::new(),
            }
        } else {
            LockStrategy::Overflow { page, scheduler }
        };

        tracing::debug!(strategy = strategy.name(), "scroll lock controller ready");

        Self {
            primary: None,
            strategy,
        }
    }

    /// Create a controller by querying the platform probe once
    pub fn from_platform(
        platform: &dyn Platform,
        page: SharedHostPage,
        scheduler: SharedUiScheduler,
    ) -> Result<Self, PlatformError> {
        let capabilities = platform.capabilities()?;
        tracing::debug!(
            platform = platform.name(),
            touch_scroll_quirk = capabilities.touch_scroll_quirk,
            "resolved platform capabilities"
        );
        Ok(Self::new(capabilities, page, scheduler))
    }

    // =========================================================================
    // Lock Operations
    // =========================================================================

    /// Begin suppressing background scroll, optionally exempting `target`
    ///
    /// With no target the whole page is locked with no exempted region.
    /// The first target since the last release becomes the primary locked
    /// region, which later matching [`enable_body_scroll`] calls release.
    ///
    /// [`enable_body_scroll`]: ScrollLockController::enable_body_scroll
    pub fn disable_body_scroll(&mut self, target: Option<&SharedScrollRegion>) {
        match &mut self.strategy {
            LockStrategy::Gesture { registry, .. } => {
                if let Some(region) = target {
                    let id = registry.register(region);
                    tracing::debug!(?id, "armed gesture suppression for exempt region");
                }
            }
            LockStrategy::Overflow { page, scheduler } => {
                Self::schedule_overflow(page, scheduler, Overflow::Hidden);
            }
        }

        // The first lock call after a release is authoritative for matching
        if self.primary.is_none() {
            self.primary = target.map(RegionId::of);
        }
    }

    /// Stop suppressing background scroll for a specific target
    ///
    /// Gesture strategy: makes the target's suppression inert. The region
    /// stays registered until [`clear_all_body_scroll_locks`] removes it.
    ///
    /// Overflow strategy: restores scrolling only when the target matches
    /// the primary locked region (two absent targets match); anything else
    /// is silently ignored.
    ///
    /// [`clear_all_body_scroll_locks`]: ScrollLockController::clear_all_body_scroll_locks
    pub fn enable_body_scroll(&mut self, target: Option<&SharedScrollRegion>) {
        match &mut self.strategy {
            LockStrategy::Gesture { registry, .. } => {
                if let Some(region) = target {
                    let id = RegionId::of(region);
                    if registry.disarm(id) {
                        tracing::debug!(?id, "disarmed gesture suppression for exempt region");
                    }
                }
            }
            LockStrategy::Overflow { page, scheduler } => {
                if target.map(RegionId::of) == self.primary {
                    Self::schedule_overflow(page, scheduler, Overflow::Auto);
                    self.primary = None;
                }
            }
        }
    }

    /// Unconditionally release all locks and exempted regions
    pub fn clear_all_body_scroll_locks(&mut self) {
        match &mut self.strategy {
            LockStrategy::Gesture { registry, gesture } => {
                registry.clear();
                gesture.reset();
                tracing::debug!("cleared exempt regions and gesture state");
            }
            LockStrategy::Overflow { page, scheduler } => {
                Self::schedule_overflow(page, scheduler, Overflow::Auto);
                self.primary = None;
            }
        }
    }

    /// Decide a forwarded touch event for `target`
    ///
    /// Only the gesture strategy ever suppresses, and only for regions
    /// that are registered and armed; every other event passes through.
    pub fn handle_touch(
        &mut self,
        target: &SharedScrollRegion,
        event: &TouchEvent,
    ) -> TouchResponse {
        match &mut self.strategy {
            LockStrategy::Overflow { .. } => TouchResponse::Allow,
            LockStrategy::Gesture { registry, gesture } => {
                let id = RegionId::of(target);
                let Some(entry) = registry.get(id) else {
                    return TouchResponse::Allow;
                };
                if !entry.is_armed() {
                    return TouchResponse::Allow;
                }

                let metrics = entry.region().metrics();
                let response = gesture.on_event(event, metrics);
                tracing::trace!(?id, phase = ?event.phase, ?response, "gesture verdict");
                response
            }
        }
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Name of the active strategy ("overflow" or "gesture")
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Identity of the current primary locked region, if one is recorded
    pub fn primary_region(&self) -> Option<RegionId> {
        self.primary
    }

    /// Number of registered exempt regions (always 0 on the overflow strategy)
    pub fn exempt_region_count(&self) -> usize {
        match &self.strategy {
            LockStrategy::Gesture { registry, .. } => registry.len(),
            LockStrategy::Overflow { .. } => 0,
        }
    }

    /// Whether `region` is registered as exempt (armed or not)
    pub fn is_exempt(&self, region: &SharedScrollRegion) -> bool {
        match &self.strategy {
            LockStrategy::Gesture { registry, .. } => registry.contains(RegionId::of(region)),
            LockStrategy::Overflow { .. } => false,
        }
    }

    /// Whether `region` is registered with gesture suppression armed
    pub fn is_armed(&self, region: &SharedScrollRegion) -> bool {
        match &self.strategy {
            LockStrategy::Gesture { registry, .. } => registry.is_armed(RegionId::of(region)),
            LockStrategy::Overflow { .. } => false,
        }
    }

    /// Current phase of the shared gesture tracker (Idle on the overflow strategy)
    pub fn gesture_phase(&self) -> GesturePhase {
        match &self.strategy {
            LockStrategy::Gesture { gesture, .. } => gesture.phase(),
            LockStrategy::Overflow { .. } => GesturePhase::Idle,
        }
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Defer an overflow write to both root containers
    ///
    /// Written one tick later; some hosts stall when root overflow is
    /// mutated synchronously from an event callback.
    fn schedule_overflow(page: &SharedHostPage, scheduler: &SharedUiScheduler, overflow: Overflow) {
        let page = Rc::clone(page);
        scheduler.defer(Box::new(move || {
            for container in RootContainer::ALL {
                page.set_root_overflow(container, overflow);
            }
        }));
        tracing::debug!(?overflow, "scheduled root overflow write");
    }
}
