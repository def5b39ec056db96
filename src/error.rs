//! Error types with actionable diagnostics.
//!
//! The scalar codecs are total functions and never fail; only the block
//! quantizers report errors, and never through sentinel float values (zero
//! and NaN are legitimate payloads).

use thiserror::Error;

/// Result type alias for precisar operations.
pub type Result<T> = std::result::Result<T, PrecisarError>;

/// Errors that can occur while building or decoding quantization blocks.
///
/// Each variant includes enough context to act on without consulting
/// external documentation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrecisarError {
    /// A quantization block must cover at least one element.
    #[error("Quantization block cannot be empty\n  → Pass at least one element per block")]
    InvalidSize,

    /// The code buffer for a quantization block could not be obtained.
    #[error("Failed to allocate a code buffer for {elements} elements\n  → Reduce the block size or free memory first")]
    AllocationFailure { elements: usize },
}
