use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use earnwatch::config::Config;
use earnwatch::extract::sections::Section;
use earnwatch::extract::ExtractorBackend;
use earnwatch::pipeline::analysis::{self, AnalysisOptions, AnalysisOutcome, Document};

/// Earnwatch: earnings manipulation risk screening for annual reports.
///
/// Compares keyword densities in the latest annual report against the
/// average of earlier reports and flags real earnings management patterns.
#[derive(Parser)]
#[command(name = "earnwatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze 2 to 5 annual reports, oldest first, latest last
    Analyze {
        /// Report files in chronological order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Text extractor backend (overrides EARNWATCH_EXTRACTOR)
        #[arg(long, value_enum)]
        extractor: Option<ExtractorBackend>,

        /// Score only this section of each report
        #[arg(long, value_enum, default_value = "full")]
        section: Section,

        /// Print the assessment as JSON
        #[arg(long)]
        json: bool,

        /// Also write a Markdown report (directory from EARNWATCH_REPORT_DIR)
        #[arg(long)]
        report: bool,
    },

    /// List the keyword sets used for scoring
    Keywords,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("earnwatch=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            files,
            extractor,
            section,
            json,
            report,
        } => {
            let config = Config::load()?;
            let backend = extractor.unwrap_or(config.extractor);

            let documents = read_documents(&files)?;
            let extractor = backend.build();
            let options = AnalysisOptions {
                section,
                show_progress: !json,
            };

            let assessment = match analysis::run(&documents, extractor.as_ref(), options)? {
                AnalysisOutcome::NotEnoughDocuments { supplied } => {
                    earnwatch::output::terminal::display_advisory(supplied);
                    return Ok(());
                }
                AnalysisOutcome::Complete(assessment) => assessment,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                earnwatch::output::terminal::display_assessment(&assessment);
            }

            if report {
                let path =
                    earnwatch::output::markdown::write_report(&assessment, &config.report_dir)?;
                if !json {
                    println!("\n{} {}", "Report written to".bold(), path.display());
                }
            }
        }

        Commands::Keywords => {
            earnwatch::output::terminal::display_keywords();
        }
    }

    Ok(())
}

/// Read every file in order. Any unreadable file aborts the run.
fn read_documents(files: &[PathBuf]) -> Result<Vec<Document>> {
    files
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            info!(document = %name, bytes = bytes.len(), "Loaded document");
            Ok(Document::new(name, bytes))
        })
        .collect()
}
