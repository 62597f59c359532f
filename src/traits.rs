use crate::types::{ImageSize, Result};

/// The capability pair every supported format implements.
///
/// Handlers are stateless, pure functions of the byte buffer; the unit
/// structs in [`crate::formats`] are registered once in an immutable table
/// and are safe to call from any number of threads.
pub trait FormatHandler: Sync {
    /// A cheap, prefix-only structural check: magic number, signature
    /// string, or a composite header sanity check. Must never panic; a
    /// buffer too short to contain the signature is simply not a match.
    fn validate(&self, data: &[u8]) -> bool;

    /// Reads the dimensions (and format-specific extras) from the header.
    ///
    /// Callers must only invoke this right after [`validate`] returned true
    /// for the same buffer. It may still fail when the buffer, though
    /// carrying a valid signature, is too short to contain the fields the
    /// size lives in, or when the structure behind the signature is
    /// malformed.
    ///
    /// [`validate`]: FormatHandler::validate
    fn calculate(&self, data: &[u8]) -> Result<ImageSize>;
}
