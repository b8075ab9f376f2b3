// Colored terminal output for an assessment.
//
// Shows the per-document metrics table, the abnormal deltas, both scores
// with their levels, the income-effect list, and the verdict banner.

use colored::Colorize;

use super::{round2, truncate_chars, DISCLAIMER};
use crate::pipeline::analysis::Assessment;
use crate::scoring::keywords;
use crate::scoring::risk::{RiskLevel, Verdict};

/// Advisory printed when fewer than two documents are supplied.
pub fn display_advisory(supplied: usize) {
    println!(
        "{} Upload at least two annual reports (previous years + current year). Got {supplied}.",
        "Note:".yellow()
    );
}

/// Display a full assessment in the terminal.
pub fn display_assessment(assessment: &Assessment) {
    println!(
        "\n{}",
        format!(
            "=== Earnings Manipulation Risk ({} reports, {} extractor, {} text) ===",
            assessment.documents.len(),
            assessment.extractor,
            assessment.section.as_str()
        )
        .bold()
    );
    println!();

    println!(
        "  {:<4} {:<32} {:>8}  {:>7}  {:>7}  {:>7}  {:>7}",
        "#".dimmed(),
        "Document".dimmed(),
        "Words".dimmed(),
        "Tone".dimmed(),
        "CFO".dimmed(),
        "Prod".dimmed(),
        "Disc".dimmed(),
    );
    println!("  {}", "-".repeat(82).dimmed());

    let last = assessment.documents.len().saturating_sub(1);
    for (i, doc) in assessment.documents.iter().enumerate() {
        let role = if i == last { "current" } else { "baseline" };
        let name = document_label(&doc.name, doc.section_found);
        println!(
            "  {:<4} {:<width$} {:>8}  {:>7.2}  {:>7.2}  {:>7.2}  {:>7.2}  {}",
            i + 1,
            name,
            doc.words,
            doc.metrics.text_tone_score,
            doc.metrics.cfo_density,
            doc.metrics.production_density,
            doc.metrics.discretionary_density,
            role.dimmed(),
            width = NAME_COLUMN,
        );
    }
    if assessment.documents.iter().any(|d| !d.section_found) {
        println!(
            "  {}",
            "* section heading not found, full text scored".dimmed()
        );
    }

    let delta = &assessment.delta;
    println!("\n  {}", "Abnormal (current - baseline mean):".bold());
    println!("    CFO density:           {:>8.2}", round2(delta.abnormal_cfo));
    println!(
        "    Production density:    {:>8.2}",
        round2(delta.abnormal_production)
    );
    println!(
        "    Discretionary density: {:>8.2}",
        round2(delta.abnormal_discretionary)
    );

    println!();
    println!(
        "  REM score:       {:>8.2}  {}",
        round2(assessment.verdict.rem_score),
        colorize_level(assessment.numeric_level)
    );
    println!(
        "  Text abnormality:{:>8.2}  {}",
        round2(delta.abnormal_text),
        colorize_level(assessment.text_level)
    );

    println!("\n  {}", "Income effects:".bold());
    if assessment.income_effects.is_empty() {
        println!("    {}", "No income-increasing pattern detected".dimmed());
    } else {
        for effect in &assessment.income_effects {
            println!("    - {effect}");
        }
    }

    println!();
    println!("  {}", verdict_banner(assessment.verdict.verdict));
    println!("\n  {}", DISCLAIMER.dimmed());
}

/// Print the fixed keyword sets.
pub fn display_keywords() {
    println!("\n{}", "=== Keyword Sets ===".bold());
    for set in keywords::ALL {
        println!("  {:<22} {}", set.name.bold(), set.keywords.join(", "));
    }
}

/// Width of the document column in the metrics table.
const NAME_COLUMN: usize = 32;

/// Document name for the metrics table, fitted to the column.
///
/// A `*` marks documents whose requested section was not found.
fn document_label(name: &str, section_found: bool) -> String {
    // truncate_chars appends "..." on truncation
    if section_found {
        truncate_chars(name, NAME_COLUMN - 3)
    } else {
        let mut label = truncate_chars(name, NAME_COLUMN - 4);
        label.push('*');
        label
    }
}

/// Colored verdict banner.
fn verdict_banner(verdict: Verdict) -> colored::ColoredString {
    let text = format!(" {} ", verdict.as_str());
    match verdict {
        Verdict::Confirmed => text.white().on_red().bold(),
        Verdict::Likely => text.black().on_bright_red(),
        Verdict::NumericOnly => text.black().on_yellow(),
        Verdict::Low => text.black().on_green(),
    }
}

/// Colorize a risk level.
fn colorize_level(level: RiskLevel) -> colored::ColoredString {
    match level {
        RiskLevel::High => level.as_str().red().bold(),
        RiskLevel::Moderate => level.as_str().yellow(),
        RiskLevel::Low => level.as_str().green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_fits_column_with_marker() {
        let long = "annual-report-fiscal-year-2023-final-version.pdf";
        assert_eq!(document_label(long, false).chars().count(), NAME_COLUMN);
        assert!(document_label(long, false).ends_with("...*"));
        assert_eq!(document_label(long, true).chars().count(), NAME_COLUMN);
    }

    #[test]
    fn test_short_label_unchanged() {
        assert_eq!(document_label("2022.pdf", true), "2022.pdf");
        assert_eq!(document_label("2022.pdf", false), "2022.pdf*");
    }
}
