//! Platform capability probe

use crate::error::PlatformError;

/// Capabilities that change how scroll locking must work
///
/// Resolved once at startup and treated as immutable for the process
/// lifetime; the controller never re-queries it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformCapabilities {
    /// The host is a touch browser family where hiding document-level
    /// overflow does not stop rubber-band scrolling, so background scroll
    /// must be suppressed per-gesture instead.
    pub touch_scroll_quirk: bool,
}

impl PlatformCapabilities {
    /// A standard host where hiding root overflow locks the page
    pub fn standard() -> Self {
        Self {
            touch_scroll_quirk: false,
        }
    }

    /// A touch-quirk mobile host requiring gesture suppression
    pub fn touch_quirk() -> Self {
        Self {
            touch_scroll_quirk: true,
        }
    }
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self::standard()
    }
}

/// Platform probe supplied by the host
///
/// Implemented by whatever identifies the host environment (a user-agent
/// sniffer in a browser embedding). Queried exactly once, at controller
/// construction.
pub trait Platform {
    /// Resolve the host's capabilities
    fn capabilities(&self) -> Result<PlatformCapabilities, PlatformError>;

    /// Get the platform name
    ///
    /// Returns a short identifier like "desktop" or "ios-safari".
    fn name(&self) -> &'static str;
}
