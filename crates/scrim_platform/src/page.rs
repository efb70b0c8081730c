//! Root overflow mutation on the host page

use std::rc::Rc;

/// Vertical overflow behavior for a root scroll container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overflow {
    /// Scrolling disabled
    Hidden,
    /// Scrolling enabled
    Auto,
}

/// The page's root scroll containers
///
/// Browsers disagree on which of the two actually scrolls the page, so
/// lock and unlock always write both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RootContainer {
    /// The document body
    Body,
    /// The document root element
    DocumentElement,
}

impl RootContainer {
    /// Both root containers, in write order
    pub const ALL: [RootContainer; 2] = [RootContainer::Body, RootContainer::DocumentElement];
}

/// Overflow mutation sink supplied by the host
pub trait HostPage {
    /// Set the vertical overflow style on one root container
    fn set_root_overflow(&self, container: RootContainer, overflow: Overflow);
}

/// Shared handle to the host page
///
/// Uses Rc since UI is single-threaded.
pub type SharedHostPage = Rc<dyn HostPage>;
