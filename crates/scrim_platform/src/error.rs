//! Host-integration error types

use thiserror::Error;

/// Errors raised at the host-integration seam
///
/// Lock and unlock operations themselves are total and never fail; the
/// only fallible step is resolving the platform capability probe.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The capability probe could not be resolved
    #[error("Capability probe failed: {0}")]
    ProbeFailed(String),

    /// Host environment not available (e.g. no document)
    #[error("Host environment not available: {0}")]
    Unavailable(String),
}

/// Result type for host-integration operations
pub type Result<T> = std::result::Result<T, PlatformError>;
