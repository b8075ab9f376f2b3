// Raw single-byte decoding of document bytes.
//
// No PDF structure is parsed. Every byte is read as a Latin-1 character,
// so the output contains PDF syntax noise alongside readable text. The
// keyword densities are computed over all of it.

use super::traits::TextExtractor;
use crate::error::ExtractError;

/// Decoder that treats the byte stream as Latin-1 text.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawExtractor;

/// Decode bytes as Latin-1 and lowercase the result.
///
/// Every byte value maps to exactly one character, so there is nothing
/// that can fail to decode.
pub fn decode_latin1_lower(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| char::from(b))
        .flat_map(char::to_lowercase)
        .collect()
}

impl TextExtractor for RawExtractor {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        Ok(decode_latin1_lower(bytes))
    }
}
