use crate::telemetry::{self, TelemetryError};
use chrono::Local;
use clap::Parser;
use mayfin_report::config::FormatOptions;
use mayfin_report::render::{
    generate_report_from_json, DocumentRenderer, JsonDocumentRenderer,
};
use mayfin_report::report::build_story;
use mayfin_report::sample::sample_record;
use serde_json::json;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT: &str = "rapport_analyse_mayfin.json";

#[derive(Parser, Debug)]
#[command(
    name = "mayfin-report-cli",
    about = "Generate a MayFin financing-analysis report story from a JSON record",
    version
)]
struct Cli {
    /// Input record file (UTF-8 JSON)
    input: Option<PathBuf>,
    /// Output artifact path
    output: Option<PathBuf>,
}

pub fn run() -> Result<(), TelemetryError> {
    telemetry::init()?;
    let cli = Cli::parse();

    match (cli.input, cli.output) {
        (Some(input), Some(output)) => run_batch(&input, &output),
        _ => run_fallback(Path::new(DEFAULT_OUTPUT)),
    }

    Ok(())
}

/// Batch mode: one structured result object on stdout, success or not.
/// Failures never escape past this boundary.
fn run_batch(input: &Path, output: &Path) {
    tracing::debug!(input = %input.display(), output = %output.display(), "batch build");
    let renderer = JsonDocumentRenderer;
    let result = generate_report_from_json(
        input,
        output,
        &FormatOptions::default(),
        &renderer,
        Local::now().naive_local(),
    );

    let payload = match result {
        Ok(()) => json!({ "success": true, "file": output.display().to_string() }),
        Err(err) => json!({ "success": false, "error": err.to_string() }),
    };
    println!("{payload}");
}

/// No-argument mode: build the built-in sample dossier and narrate progress.
fn run_fallback(output: &Path) {
    println!("Génération du Rapport d'Analyse de Financement MayFin...");

    let record = sample_record();
    let story = build_story(&record, &FormatOptions::default(), Local::now().naive_local());
    println!("Story assemblée : {} blocs", story.blocks.len());

    let renderer = JsonDocumentRenderer;
    match renderer.render(&story, output) {
        Ok(()) => println!("Rapport généré avec succès : {}", output.display()),
        Err(err) => eprintln!("échec du rendu : {err}"),
    }
}
