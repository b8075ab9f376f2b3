// Text extractor trait — swap-ready abstraction over how bytes become text.
//
// The raw decoder is the default. The PDF backend reads page text through
// lopdf instead, and can fail on malformed input.

use crate::error::ExtractError;

/// Turns a document's raw bytes into lowercase text.
pub trait TextExtractor {
    /// Short backend name for logs and reports.
    fn name(&self) -> &'static str;

    /// Decode `bytes` into lowercase text.
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}
