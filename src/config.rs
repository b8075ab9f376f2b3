use std::env::{self, VarError};
use std::path::PathBuf;

use anyhow::Result;

use crate::extract::ExtractorBackend;

/// Default directory for Markdown reports.
pub const DEFAULT_REPORT_DIR: &str = "./reports";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Keyword
/// sets, weights and thresholds are constants and are not configurable.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which extractor turns document bytes into text (default: raw)
    pub extractor: ExtractorBackend,
    /// Where `analyze --report` writes Markdown reports
    pub report_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let extractor = parse_extractor(env::var("EARNWATCH_EXTRACTOR"))?;

        let report_dir = env::var("EARNWATCH_REPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_REPORT_DIR));

        Ok(Self {
            extractor,
            report_dir,
        })
    }
}

/// Interpret the EARNWATCH_EXTRACTOR variable. Unset means raw.
fn parse_extractor(value: Result<String, VarError>) -> Result<ExtractorBackend> {
    match value.as_deref() {
        Ok("pdf") => Ok(ExtractorBackend::Pdf),
        Ok("raw") | Err(VarError::NotPresent) => Ok(ExtractorBackend::Raw),
        Ok(other) => anyhow::bail!(
            "Unknown EARNWATCH_EXTRACTOR value '{other}'. Expected 'raw' or 'pdf'."
        ),
        Err(VarError::NotUnicode(_)) => {
            anyhow::bail!("EARNWATCH_EXTRACTOR is not valid Unicode. Expected 'raw' or 'pdf'.")
        }
    }
}
