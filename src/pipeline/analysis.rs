// Batch analysis pipeline: documents -> metrics -> baseline delta -> verdict.
//
// Documents are processed strictly in the order given, oldest first. The
// last one is the current period and everything before it forms the
// baseline. Any failure aborts the whole batch; no partial results are
// returned.
//
// 1. Check the batch size (fewer than two is an advisory, not an error)
// 2. Extract lowercase text from each document
// 3. Narrow to the requested section, falling back to the full text
// 4. Reject documents with too little text
// 5. Build per-document metrics
// 6. Compare the current period against the baseline mean and classify

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::AnalysisError;
use crate::extract::sections::{self, Section};
use crate::extract::traits::TextExtractor;
use crate::scoring::baseline::{self, BaselineDelta};
use crate::scoring::density::word_count;
use crate::scoring::metrics::{self, DocumentMetrics, MIN_TEXT_CHARS};
use crate::scoring::risk::{self, IncomeEffect, RiskLevel, RiskVerdict};

/// Fewest documents that give a baseline and a current period.
pub const MIN_DOCUMENTS: usize = 2;
/// Most documents accepted in one batch.
pub const MAX_DOCUMENTS: usize = 5;

/// One uploaded document: a display name and its raw bytes.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Per-document details kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub name: String,
    /// Characters in the scored text
    pub chars: usize,
    /// Whitespace-delimited words in the scored text
    pub words: usize,
    /// Whether the requested section was found (always true for `full`)
    pub section_found: bool,
    pub metrics: DocumentMetrics,
}

/// Complete result of a successful analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Extractor backend that produced the text
    pub extractor: String,
    pub section: Section,
    /// Documents in input order; the last one is the current period
    pub documents: Vec<DocumentSummary>,
    /// Field-wise mean of every document except the last
    pub baseline: DocumentMetrics,
    pub delta: BaselineDelta,
    pub numeric_level: RiskLevel,
    pub text_level: RiskLevel,
    pub income_effects: Vec<IncomeEffect>,
    pub verdict: RiskVerdict,
}

/// What the pipeline produced.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// Not enough documents for a baseline; nothing was scored
    NotEnoughDocuments { supplied: usize },
    Complete(Box<Assessment>),
}

/// Options for a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    pub section: Section,
    /// Draw a progress bar on stderr while documents are processed
    pub show_progress: bool,
}

/// Run the analysis over `documents`, ordered oldest to newest.
pub fn run(
    documents: &[Document],
    extractor: &dyn TextExtractor,
    options: AnalysisOptions,
) -> Result<AnalysisOutcome, AnalysisError> {
    if documents.len() < MIN_DOCUMENTS {
        info!(supplied = documents.len(), "Not enough documents for a baseline");
        return Ok(AnalysisOutcome::NotEnoughDocuments {
            supplied: documents.len(),
        });
    }
    if documents.len() > MAX_DOCUMENTS {
        return Err(AnalysisError::TooManyDocuments {
            supplied: documents.len(),
            max: MAX_DOCUMENTS,
        });
    }

    info!(
        documents = documents.len(),
        extractor = extractor.name(),
        section = options.section.as_str(),
        "Starting analysis"
    );

    let pb = if options.show_progress {
        let pb = ProgressBar::new(documents.len() as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("  Analyzing [{bar:30}] {pos}/{len}")
        {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut summaries = Vec::with_capacity(documents.len());
    for (i, doc) in documents.iter().enumerate() {
        let index = i + 1;
        let summary = match analyze_document(index, doc, extractor, options.section) {
            Ok(summary) => summary,
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        };
        summaries.push(summary);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let series: Vec<DocumentMetrics> = summaries.iter().map(|s| s.metrics).collect();
    let Some((baseline_mean, delta)) = baseline::compare(&series) else {
        return Ok(AnalysisOutcome::NotEnoughDocuments {
            supplied: series.len(),
        });
    };

    let (numeric_level, text_level, verdict) = risk::classify(&delta);
    let income_effects = risk::income_effects(&delta);

    info!(
        rem_score = verdict.rem_score,
        numeric = %numeric_level,
        text = %text_level,
        verdict = %verdict.verdict,
        "Analysis complete"
    );

    Ok(AnalysisOutcome::Complete(Box::new(Assessment {
        extractor: extractor.name().to_string(),
        section: options.section,
        documents: summaries,
        baseline: baseline_mean,
        delta,
        numeric_level,
        text_level,
        income_effects,
        verdict,
    })))
}

/// Extract, validate and score a single document.
fn analyze_document(
    index: usize,
    doc: &Document,
    extractor: &dyn TextExtractor,
    section: Section,
) -> Result<DocumentSummary, AnalysisError> {
    let text = extractor
        .extract(&doc.bytes)
        .map_err(|source| AnalysisError::Extraction {
            index,
            name: doc.name.clone(),
            source,
        })?;

    let (scored, section_found) = match sections::locate(&text, section) {
        Some(slice) => (slice, true),
        None => {
            warn!(
                document = %doc.name,
                section = section.as_str(),
                "Section heading not found, scoring full text"
            );
            (text.as_str(), false)
        }
    };

    let chars = scored.chars().count();
    if !metrics::has_sufficient_text(scored) {
        return Err(AnalysisError::InsufficientText {
            index,
            name: doc.name.clone(),
            chars,
            min: MIN_TEXT_CHARS,
        });
    }

    let doc_metrics = metrics::build_metrics(scored);
    let words = word_count(scored);

    debug!(
        document = %doc.name,
        chars,
        words,
        tone = doc_metrics.text_tone_score,
        cfo = doc_metrics.cfo_density,
        production = doc_metrics.production_density,
        discretionary = doc_metrics.discretionary_density,
        "Scored document"
    );

    Ok(DocumentSummary {
        name: doc.name.clone(),
        chars,
        words,
        section_found,
        metrics: doc_metrics,
    })
}
