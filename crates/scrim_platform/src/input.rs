//! Touch input types forwarded by the host

/// Touch gesture phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger touched down
    Started,
    /// A finger moved
    Moved,
    /// A finger lifted
    Ended,
    /// The gesture was cancelled (e.g. by a system gesture)
    Cancelled,
}

/// One active touch point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Unique identifier for this touch
    pub id: u64,
    /// X position in page coordinates
    pub x: f32,
    /// Y position in page coordinates
    pub y: f32,
}

impl TouchPoint {
    /// Create a touch point
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// A touch event targeting a region
///
/// Carries a snapshot of every touch point currently active on the target,
/// mirroring what the host's native event delivers. Gesture logic that only
/// applies to single-finger input uses [`TouchEvent::single_touch`].
#[derive(Clone, Debug)]
pub struct TouchEvent {
    /// Which phase of the gesture this event reports
    pub phase: TouchPhase,
    /// All touch points currently active on the target
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Create an event with an explicit phase
    pub fn new(phase: TouchPhase, touches: Vec<TouchPoint>) -> Self {
        Self { phase, touches }
    }

    /// A touch-start event
    pub fn started(touches: Vec<TouchPoint>) -> Self {
        Self::new(TouchPhase::Started, touches)
    }

    /// A touch-move event
    pub fn moved(touches: Vec<TouchPoint>) -> Self {
        Self::new(TouchPhase::Moved, touches)
    }

    /// A touch-end event
    pub fn ended(touches: Vec<TouchPoint>) -> Self {
        Self::new(TouchPhase::Ended, touches)
    }

    /// A touch-cancel event
    pub fn cancelled(touches: Vec<TouchPoint>) -> Self {
        Self::new(TouchPhase::Cancelled, touches)
    }

    /// The active touch point, if exactly one finger is down
    ///
    /// Multi-touch gestures (pinch/zoom) return `None` so callers leave
    /// them to the host's native handling.
    pub fn single_touch(&self) -> Option<&TouchPoint> {
        match self.touches.as_slice() {
            [point] => Some(point),
            _ => None,
        }
    }
}

/// Verdict on a forwarded touch event
///
/// Returned to the host, which must translate [`TouchResponse::Suppress`]
/// into preventing the default browsing action for the event.
#[must_use = "the host must honor the suppression verdict"]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchResponse {
    /// Let the native scroll proceed
    Allow,
    /// Suppress the default browsing action
    Suppress,
}

impl TouchResponse {
    /// Returns true if the default action must be suppressed
    pub fn is_suppressed(&self) -> bool {
        matches!(self, TouchResponse::Suppress)
    }
}
