// Markdown report generation.
//
// Writes a self-contained summary of one assessment: document table,
// abnormal deltas, scores with levels, income effects and the verdict.

use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tracing::info;

use super::{round2, DISCLAIMER};
use crate::pipeline::analysis::Assessment;

/// Render an assessment as Markdown.
pub fn render(
    assessment: &Assessment,
    generated_at: DateTime<Local>,
) -> Result<String, fmt::Error> {
    let mut md = String::new();
    let delta = &assessment.delta;

    writeln!(md, "# Earnings Manipulation Risk Report\n")?;
    writeln!(
        md,
        "Generated {} from {} reports ({} extractor, {} text).\n",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        assessment.documents.len(),
        assessment.extractor,
        assessment.section.as_str()
    )?;

    writeln!(md, "## Verdict\n")?;
    writeln!(md, "**{}**\n", assessment.verdict.verdict)?;

    writeln!(md, "## Documents\n")?;
    writeln!(
        md,
        "| # | Document | Role | Words | Tone | CFO | Production | Discretionary |"
    )?;
    writeln!(md, "|---|---|---|---:|---:|---:|---:|---:|")?;
    let last = assessment.documents.len().saturating_sub(1);
    for (i, doc) in assessment.documents.iter().enumerate() {
        let role = if i == last { "current" } else { "baseline" };
        writeln!(
            md,
            "| {} | {} | {} | {} | {:.2} | {:.2} | {:.2} | {:.2} |",
            i + 1,
            doc.name.replace('|', "\\|"),
            role,
            doc.words,
            doc.metrics.text_tone_score,
            doc.metrics.cfo_density,
            doc.metrics.production_density,
            doc.metrics.discretionary_density,
        )?;
    }
    writeln!(md)?;

    writeln!(md, "## Abnormal metrics\n")?;
    writeln!(md, "| Metric | Value |")?;
    writeln!(md, "|---|---:|")?;
    writeln!(md, "| Abnormal CFO | {:.2} |", round2(delta.abnormal_cfo))?;
    writeln!(
        md,
        "| Abnormal production | {:.2} |",
        round2(delta.abnormal_production)
    )?;
    writeln!(
        md,
        "| Abnormal discretionary | {:.2} |",
        round2(delta.abnormal_discretionary)
    )?;
    writeln!(
        md,
        "| REM score | {:.2} ({}) |",
        round2(assessment.verdict.rem_score),
        assessment.numeric_level
    )?;
    writeln!(
        md,
        "| Text abnormality | {:.2} ({}) |",
        round2(delta.abnormal_text),
        assessment.text_level
    )?;
    writeln!(md)?;

    writeln!(md, "## Income effects\n")?;
    if assessment.income_effects.is_empty() {
        writeln!(md, "No income-increasing pattern detected.\n")?;
    } else {
        for effect in &assessment.income_effects {
            writeln!(md, "- {effect}")?;
        }
        writeln!(md)?;
    }

    writeln!(md, "---\n\n_{DISCLAIMER}_")?;
    Ok(md)
}

/// Write the Markdown report into `dir`, creating it if needed.
///
/// Returns the path of the written file.
pub fn write_report(assessment: &Assessment, dir: &Path) -> Result<PathBuf> {
    let now = Local::now();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory {}", dir.display()))?;

    let path = dir.join(format!("earnwatch-{}.md", now.format("%Y%m%d-%H%M%S")));
    std::fs::write(&path, render(assessment, now)?)
        .with_context(|| format!("Failed to write report {}", path.display()))?;

    info!(path = %path.display(), "Wrote Markdown report");
    Ok(path)
}
