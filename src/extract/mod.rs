// Text extraction — byte decoding backends and section location.

pub mod pdf;
pub mod raw;
pub mod sections;
pub mod traits;

use serde::{Deserialize, Serialize};

use self::pdf::PdfExtractor;
use self::raw::RawExtractor;
use self::traits::TextExtractor;

/// Which extractor backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorBackend {
    /// Latin-1 decoding of the raw byte stream (never fails)
    #[default]
    Raw,
    /// Page text extracted from the parsed PDF
    Pdf,
}

impl ExtractorBackend {
    /// Build the extractor for this backend.
    pub fn build(self) -> Box<dyn TextExtractor> {
        match self {
            ExtractorBackend::Raw => Box::new(RawExtractor),
            ExtractorBackend::Pdf => Box::new(PdfExtractor),
        }
    }
}
