//! Touch gesture suppression for exempt regions
//!
//! On touch-quirk browsers, hiding root overflow does not stop the page
//! from rubber-banding behind an overlay. Instead, each exempted region
//! watches its own touch gestures and suppresses the ones that would
//! scroll past the region's edge and bleed into the page behind it.
//!
//! # Gesture state machine
//!
//! One tracker is shared by every exempt region (only one finger drives
//! vertical scrolling at a time):
//!
//! ```text
//!              touch-start (single finger)
//!     Idle ─────────────────────────────────► Tracking
//!       ▲                                        │
//!       │ global clear                           │ touch-move: verdict
//!       └────────────────────────────────────────┘
//! ```
//!
//! A touch-move while `Tracking` compares the finger's travel against the
//! region's scroll boundaries: pulling down at the top, or pushing up at
//! the bottom, is suppressed; everything else scrolls the region natively.
//! Multi-touch gestures are ignored entirely so native pinch-zoom keeps
//! working.

use std::collections::HashMap;
use std::rc::Rc;

use scrim_platform::{
    RegionId, ScrollMetrics, SharedScrollRegion, TouchEvent, TouchPhase, TouchResponse,
};

/// Sentinel for "no touch-start recorded"
const UNSET_TOUCH_Y: f32 = -1.0;

// ============================================================================
// Gesture Tracking
// ============================================================================

/// Phase of the shared gesture tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    /// No single-finger touch-start recorded
    #[default]
    Idle,
    /// A single-finger start coordinate is recorded
    Tracking,
}

/// Single-finger vertical gesture tracker
///
/// Records the most recent single-touch start coordinate and turns
/// touch-moves into [`TouchResponse`] verdicts. The recorded coordinate
/// persists across touch-end (the next start overwrites it); only
/// [`TouchGesture::reset`] returns the tracker to the unset sentinel.
#[derive(Debug, Clone)]
pub struct TouchGesture {
    /// Vertical coordinate of the last single-finger touch-start,
    /// or `UNSET_TOUCH_Y` when none has been recorded
    initial_client_y: f32,
}

impl Default for TouchGesture {
    fn default() -> Self {
        Self {
            initial_client_y: UNSET_TOUCH_Y,
        }
    }
}

impl TouchGesture {
    /// Create a tracker in the unset state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase, derived from the recorded coordinate
    pub fn phase(&self) -> GesturePhase {
        if self.initial_client_y == UNSET_TOUCH_Y {
            GesturePhase::Idle
        } else {
            GesturePhase::Tracking
        }
    }

    /// Feed one touch event for a region with the given metrics
    ///
    /// Only touch-moves can suppress; starts record, ends and cancels pass
    /// through. Events carrying more than one active touch point never
    /// suppress and never disturb the recorded coordinate.
    pub fn on_event(&mut self, event: &TouchEvent, metrics: ScrollMetrics) -> TouchResponse {
        match event.phase {
            TouchPhase::Started => {
                if let Some(point) = event.single_touch() {
                    self.initial_client_y = point.y;
                }
                TouchResponse::Allow
            }
            TouchPhase::Moved => match event.single_touch() {
                Some(point) => self.verdict(point.y, metrics),
                None => TouchResponse::Allow,
            },
            TouchPhase::Ended | TouchPhase::Cancelled => TouchResponse::Allow,
        }
    }

    /// Forget the recorded coordinate
    pub fn reset(&mut self) {
        self.initial_client_y = UNSET_TOUCH_Y;
    }

    /// Decide whether a move to `client_y` bleeds past the region's edge
    ///
    /// The delta is computed against the raw recorded value, sentinel
    /// included, so a move with no preceding start behaves the same as
    /// the original utility this reproduces.
    fn verdict(&self, client_y: f32, metrics: ScrollMetrics) -> TouchResponse {
        let delta = client_y - self.initial_client_y;

        // Finger moving down at the top edge would scroll the page behind
        if metrics.at_top() && delta > 0.0 {
            return TouchResponse::Suppress;
        }

        // Finger moving up at the bottom edge would scroll the page behind
        if metrics.totally_scrolled() && delta < 0.0 {
            return TouchResponse::Suppress;
        }

        TouchResponse::Allow
    }
}

// ============================================================================
// Exempt Region Registry
// ============================================================================

/// A region exempted from the global scroll lock
pub struct ExemptRegion {
    /// The host's region handle
    region: SharedScrollRegion,
    /// Whether gesture handling is attached (armed) or inert
    armed: bool,
}

impl ExemptRegion {
    /// The host's region handle
    pub fn region(&self) -> &SharedScrollRegion {
        &self.region
    }

    /// Whether gesture handling is currently attached
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Registry of exempt regions, keyed by region identity
///
/// Disarming leaves the entry registered; only [`ExemptRegistry::clear`]
/// removes entries. Re-registering an existing region re-arms it.
#[derive(Default)]
pub struct ExemptRegistry {
    entries: HashMap<RegionId, ExemptRegion>,
}

impl ExemptRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or re-register) a region, armed
    pub fn register(&mut self, region: &SharedScrollRegion) -> RegionId {
        let id = RegionId::of(region);
        self.entries.insert(
            id,
            ExemptRegion {
                region: Rc::clone(region),
                armed: true,
            },
        );
        id
    }

    /// Make a region's gesture handling inert, keeping it registered
    ///
    /// Returns true if an armed entry was disarmed.
    pub fn disarm(&mut self, id: RegionId) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) if entry.armed => {
                entry.armed = false;
                true
            }
            _ => false,
        }
    }

    /// Look up an entry by identity
    pub fn get(&self, id: RegionId) -> Option<&ExemptRegion> {
        self.entries.get(&id)
    }

    /// Whether a region is registered (armed or not)
    pub fn contains(&self, id: RegionId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Whether a region is registered and armed
    pub fn is_armed(&self, id: RegionId) -> bool {
        self.entries.get(&id).is_some_and(|entry| entry.armed)
    }

    /// Number of registered regions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no regions are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_platform::{ScrollRegion, TouchPoint};
    use std::rc::Rc;

    fn single(y: f32) -> Vec<TouchPoint> {
        vec![TouchPoint::new(1, 40.0, y)]
    }

    fn at_top() -> ScrollMetrics {
        ScrollMetrics::new(0.0, 1000.0, 400.0)
    }

    fn mid_scroll() -> ScrollMetrics {
        ScrollMetrics::new(300.0, 1000.0, 400.0)
    }

    fn at_bottom() -> ScrollMetrics {
        ScrollMetrics::new(600.0, 1000.0, 400.0)
    }

    #[test]
    fn test_start_records_and_allows() {
        let mut gesture = TouchGesture::new();
        assert_eq!(gesture.phase(), GesturePhase::Idle);

        let response = gesture.on_event(&TouchEvent::started(single(100.0)), at_top());
        assert_eq!(response, TouchResponse::Allow);
        assert_eq!(gesture.phase(), GesturePhase::Tracking);
    }

    #[test]
    fn test_downward_pull_at_top_is_suppressed() {
        let mut gesture = TouchGesture::new();
        let _ = gesture.on_event(&TouchEvent::started(single(100.0)), at_top());

        let response = gesture.on_event(&TouchEvent::moved(single(150.0)), at_top());
        assert!(response.is_suppressed());
    }

    #[test]
    fn test_not_at_boundary_allows() {
        let mut gesture = TouchGesture::new();
        let _ = gesture.on_event(&TouchEvent::started(single(100.0)), mid_scroll());

        // Away from both edges, both directions scroll the region natively
        let down = gesture.on_event(&TouchEvent::moved(single(150.0)), mid_scroll());
        assert_eq!(down, TouchResponse::Allow);
        let up = gesture.on_event(&TouchEvent::moved(single(50.0)), mid_scroll());
        assert_eq!(up, TouchResponse::Allow);
    }

    #[test]
    fn test_upward_push_at_bottom_is_suppressed() {
        let mut gesture = TouchGesture::new();
        let _ = gesture.on_event(&TouchEvent::started(single(100.0)), at_bottom());

        let response = gesture.on_event(&TouchEvent::moved(single(60.0)), at_bottom());
        assert!(response.is_suppressed());

        // Moving down at the bottom is fine, the region scrolls back up
        let response = gesture.on_event(&TouchEvent::moved(single(140.0)), at_bottom());
        assert_eq!(response, TouchResponse::Allow);
    }

    #[test]
    fn test_multi_touch_never_suppresses() {
        let mut gesture = TouchGesture::new();
        let _ = gesture.on_event(&TouchEvent::started(single(100.0)), at_top());

        let pinch = vec![TouchPoint::new(1, 40.0, 150.0), TouchPoint::new(2, 80.0, 160.0)];
        let response = gesture.on_event(&TouchEvent::moved(pinch.clone()), at_top());
        assert_eq!(response, TouchResponse::Allow);

        // A multi-touch start leaves the recorded coordinate alone
        let _ = gesture.on_event(&TouchEvent::started(pinch), at_top());
        let response = gesture.on_event(&TouchEvent::moved(single(150.0)), at_top());
        assert!(response.is_suppressed());
    }

    #[test]
    fn test_end_does_not_reset_tracking() {
        let mut gesture = TouchGesture::new();
        let _ = gesture.on_event(&TouchEvent::started(single(100.0)), at_top());
        let _ = gesture.on_event(&TouchEvent::ended(single(100.0)), at_top());

        // Coordinate persists until the next start or an explicit reset
        assert_eq!(gesture.phase(), GesturePhase::Tracking);
        let response = gesture.on_event(&TouchEvent::moved(single(150.0)), at_top());
        assert!(response.is_suppressed());

        gesture.reset();
        assert_eq!(gesture.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_move_without_start_uses_sentinel_delta() {
        // delta = y - (-1.0); any on-screen y moves "down", so the top
        // boundary suppresses even with no start recorded
        let mut gesture = TouchGesture::new();
        let response = gesture.on_event(&TouchEvent::moved(single(10.0)), at_top());
        assert!(response.is_suppressed());

        let response = gesture.on_event(&TouchEvent::moved(single(10.0)), mid_scroll());
        assert_eq!(response, TouchResponse::Allow);
    }

    struct FixedRegion;

    impl ScrollRegion for FixedRegion {
        fn metrics(&self) -> ScrollMetrics {
            ScrollMetrics::default()
        }
    }

    #[test]
    fn test_registry_register_disarm_clear() {
        let region: SharedScrollRegion = Rc::new(FixedRegion);
        let other: SharedScrollRegion = Rc::new(FixedRegion);
        let mut registry = ExemptRegistry::new();

        let id = registry.register(&region);
        assert!(registry.contains(id));
        assert!(registry.is_armed(id));
        assert_eq!(registry.len(), 1);

        // Disarming keeps the entry registered
        assert!(registry.disarm(id));
        assert!(registry.contains(id));
        assert!(!registry.is_armed(id));
        assert!(!registry.disarm(id));

        // Re-registering re-arms
        registry.register(&region);
        assert!(registry.is_armed(id));

        // Disarming something never registered is a no-op
        assert!(!registry.disarm(RegionId::of(&other)));

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.contains(id));
    }
}
