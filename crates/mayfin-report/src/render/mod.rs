//! Boundary to the external document renderer.
//!
//! The core's contract ends at handing over the story; anything about page
//! layout lives behind [`DocumentRenderer`]. The shipped implementation
//! serializes the story losslessly as JSON for a downstream layout engine.

use crate::config::FormatOptions;
use crate::error::{RenderError, ReportError};
use crate::record::ReportRecord;
use crate::report::{build_story, ReportStory};
use chrono::NaiveDateTime;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub trait DocumentRenderer {
    fn render(&self, story: &ReportStory, path: &Path) -> Result<(), RenderError>;
}

/// Default renderer: pretty-printed JSON story, one file per build.
#[derive(Debug, Default)]
pub struct JsonDocumentRenderer;

impl DocumentRenderer for JsonDocumentRenderer {
    fn render(&self, story: &ReportStory, path: &Path) -> Result<(), RenderError> {
        let file = fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, story)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// One-shot build: read a UTF-8 JSON record, assemble the story, render it.
/// Every fatal condition maps into [`ReportError`]; the caller converts it
/// into the structured result object of the CLI contract.
pub fn generate_report_from_json(
    input: &Path,
    output: &Path,
    options: &FormatOptions,
    renderer: &dyn DocumentRenderer,
    generated_at: NaiveDateTime,
) -> Result<(), ReportError> {
    let raw = fs::read_to_string(input).map_err(|source| ReportError::Input {
        path: input.to_path_buf(),
        source,
    })?;
    let record: ReportRecord =
        serde_json::from_str(&raw).map_err(|source| ReportError::Decode {
            path: input.to_path_buf(),
            source,
        })?;

    let story = build_story(&record, options, generated_at);
    info!(blocks = story.blocks.len(), output = %output.display(), "story assembled");

    renderer
        .render(&story, output)
        .map_err(|source| ReportError::Render {
            path: output.to_path_buf(),
            source,
        })
}
