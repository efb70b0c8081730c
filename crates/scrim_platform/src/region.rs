//! Scrollable region handles and scroll metrics

use std::rc::Rc;

/// Snapshot of a region's vertical scroll state
///
/// All values are in pixels, read from the host at the moment a gesture
/// decision is needed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top
    pub scroll_top: f32,
    /// Total height of the scrollable content
    pub scroll_height: f32,
    /// Visible height of the region
    pub client_height: f32,
}

impl ScrollMetrics {
    /// Create a metrics snapshot
    pub fn new(scroll_top: f32, scroll_height: f32, client_height: f32) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// The region is at its top scroll boundary
    pub fn at_top(&self) -> bool {
        self.scroll_top == 0.0
    }

    /// The region is scrolled all the way to its bottom boundary
    ///
    /// Uses `scroll_height - scroll_top <= client_height`, which stays true
    /// under the sub-pixel rounding some hosts report near the edge.
    pub fn totally_scrolled(&self) -> bool {
        self.scroll_height - self.scroll_top <= self.client_height
    }
}

/// A scrollable region supplied by the host
///
/// Implemented over whatever the host's element handle is; the controller
/// only ever asks for the current metrics.
pub trait ScrollRegion {
    /// Read the region's current scroll metrics
    fn metrics(&self) -> ScrollMetrics;
}

/// Shared handle to a scroll region
///
/// Uses Rc since UI is single-threaded.
pub type SharedScrollRegion = Rc<dyn ScrollRegion>;

/// Identity key for a scroll region
///
/// Two handles map to the same `RegionId` iff they refer to the same
/// underlying region. Derived from the shared handle's data pointer, so it
/// stays stable for as long as the host keeps the handle alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionId(usize);

impl RegionId {
    /// Identity of the region behind a shared handle
    pub fn of(region: &SharedScrollRegion) -> Self {
        RegionId(Rc::as_ptr(region) as *const () as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRegion(ScrollMetrics);

    impl ScrollRegion for FixedRegion {
        fn metrics(&self) -> ScrollMetrics {
            self.0
        }
    }

    #[test]
    fn test_boundary_predicates() {
        let top = ScrollMetrics::new(0.0, 1000.0, 400.0);
        assert!(top.at_top());
        assert!(!top.totally_scrolled());

        let middle = ScrollMetrics::new(300.0, 1000.0, 400.0);
        assert!(!middle.at_top());
        assert!(!middle.totally_scrolled());

        let bottom = ScrollMetrics::new(600.0, 1000.0, 400.0);
        assert!(bottom.totally_scrolled());

        // Sub-pixel overshoot near the bottom edge still counts
        let rounded = ScrollMetrics::new(600.4, 1000.0, 400.0);
        assert!(rounded.totally_scrolled());
    }

    #[test]
    fn test_short_content_is_both_boundaries() {
        // Content shorter than the viewport never scrolls
        let short = ScrollMetrics::new(0.0, 200.0, 400.0);
        assert!(short.at_top());
        assert!(short.totally_scrolled());
    }

    #[test]
    fn test_region_identity() {
        let a: SharedScrollRegion = Rc::new(FixedRegion(ScrollMetrics::default()));
        let b: SharedScrollRegion = Rc::new(FixedRegion(ScrollMetrics::default()));
        let a_again = Rc::clone(&a);

        assert_eq!(RegionId::of(&a), RegionId::of(&a_again));
        assert_ne!(RegionId::of(&a), RegionId::of(&b));
    }
}
