// Error taxonomy for extraction and batch analysis.
//
// Too few documents is deliberately absent: it is an advisory outcome of
// the pipeline, not a failure.

use thiserror::Error;

/// Failure turning document bytes into text.
///
/// Only the PDF backend produces these. The raw decoder always succeeds.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to parse PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("PDF has no pages")]
    NoPages,
}

/// Failure that aborts a whole analysis batch.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(
        "document {index} ({name}) has insufficient text: {chars} characters, need at least {min}"
    )]
    InsufficientText {
        index: usize,
        name: String,
        chars: usize,
        min: usize,
    },

    #[error("too many documents: {supplied} supplied, at most {max} allowed")]
    TooManyDocuments { supplied: usize, max: usize },

    #[error("could not extract text from document {index} ({name})")]
    Extraction {
        index: usize,
        name: String,
        #[source]
        source: ExtractError,
    },
}
