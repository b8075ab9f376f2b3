// Per-document metrics: one tone score plus three REM keyword densities.
//
// The tone score blends optimism, uncertainty and justification language
// with fixed weights. The three densities are the raw inputs to the
// baseline comparison.

use serde::{Deserialize, Serialize};

use super::density::density;
use super::keywords::{CFO, DISCRETIONARY, JUSTIFICATION, OPTIMISM, PRODUCTION, UNCERTAINTY};

/// Minimum number of characters a document's text needs before it is scored.
pub const MIN_TEXT_CHARS: usize = 1200;

const OPTIMISM_WEIGHT: f64 = 0.30;
const UNCERTAINTY_WEIGHT: f64 = 0.40;
const JUSTIFICATION_WEIGHT: f64 = 0.30;

/// Metrics derived from exactly one document. All fields are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentMetrics {
    /// Weighted blend of optimism, uncertainty and justification densities
    pub text_tone_score: f64,
    /// Cash-flow-from-operations keyword density
    pub cfo_density: f64,
    /// Production / inventory keyword density
    pub production_density: f64,
    /// Discretionary expense keyword density
    pub discretionary_density: f64,
}

/// Whether `text` is long enough to be scored.
///
/// Length is measured in characters, not bytes.
pub fn has_sufficient_text(text: &str) -> bool {
    text.chars().count() >= MIN_TEXT_CHARS
}

/// Composite tone score for a document.
pub fn text_tone_score(text: &str) -> f64 {
    OPTIMISM_WEIGHT * density(text, OPTIMISM.keywords)
        + UNCERTAINTY_WEIGHT * density(text, UNCERTAINTY.keywords)
        + JUSTIFICATION_WEIGHT * density(text, JUSTIFICATION.keywords)
}

/// Build the metrics record for one document's (lowercased) text.
///
/// Callers must check [`has_sufficient_text`] first; the pipeline aborts the
/// whole batch rather than scoring a short document.
pub fn build_metrics(text: &str) -> DocumentMetrics {
    DocumentMetrics {
        text_tone_score: text_tone_score(text),
        cfo_density: density(text, CFO.keywords),
        production_density: density(text, PRODUCTION.keywords),
        discretionary_density: density(text, DISCRETIONARY.keywords),
    }
}
