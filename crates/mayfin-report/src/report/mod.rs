//! Report assembly: fixed section order, page chrome and document metadata.

pub mod blocks;
mod sections;

pub use blocks::{Block, BulletItem, BulletMarker, HeadingLevel, KeyValueRow, TableRow};

use crate::config::FormatOptions;
use crate::record::ReportRecord;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Metadata strings handed to the renderer alongside the story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMeta {
    pub title: String,
    pub author: String,
    pub page_size: String,
}

/// Content of the repeated page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageHeader {
    pub brand_mark: String,
    pub confidentiality: String,
}

/// Content of the repeated page footer. The page-number placeholder is
/// substituted by the renderer, which alone knows physical pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFooter {
    pub page_number_placeholder: String,
    pub generated_on: String,
}

/// The complete ordered block sequence plus decoration for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStory {
    pub meta: DocumentMeta,
    pub header: PageHeader,
    pub footer: PageFooter,
    pub blocks: Vec<Block>,
}

/// Builds the full story for one record. Pure: the same record, options and
/// generation instant always produce an identical story. The instant is
/// sampled once by the caller so the cover date and footer timestamp agree.
pub fn build_story(
    record: &ReportRecord,
    options: &FormatOptions,
    generated_at: NaiveDateTime,
) -> ReportStory {
    let section_blocks = [
        sections::cover::blocks(record, options, generated_at),
        sections::summary::blocks(record, options),
        sections::identity::blocks(record, options),
        sections::project::blocks(record, options),
        sections::financial::blocks(record, options),
        sections::sector::blocks(record, options),
        sections::recommendation::blocks(record, options),
        sections::appendix::blocks(record, options),
    ];

    let last = section_blocks.len() - 1;
    let mut blocks = Vec::new();
    for (index, mut section) in section_blocks.into_iter().enumerate() {
        blocks.append(&mut section);
        // Every section but the last ends with a break so each major section
        // starts on a fresh page regardless of renderer pagination heuristics.
        if index < last {
            blocks.push(Block::PageBreak);
        }
    }

    ReportStory {
        meta: DocumentMeta {
            title: "Rapport d'Analyse de Financement".to_string(),
            author: "MayFin - Analyse IA".to_string(),
            page_size: "A4".to_string(),
        },
        header: PageHeader {
            brand_mark: "MAYFIN".to_string(),
            confidentiality: "Analyse de Financement - Document Confidentiel".to_string(),
        },
        footer: PageFooter {
            page_number_placeholder: "Page {page}".to_string(),
            generated_on: format!("Généré le {}", generated_at.format("%d/%m/%Y à %H:%M")),
        },
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn build_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 29)
            .expect("valid date")
            .and_hms_opt(9, 15, 0)
            .expect("valid time")
    }

    #[test]
    fn seven_page_breaks_separate_the_eight_sections() {
        let record = ReportRecord::default();
        let story = build_story(&record, &FormatOptions::default(), build_at());
        let breaks = story
            .blocks
            .iter()
            .filter(|block| matches!(block, Block::PageBreak))
            .count();
        assert_eq!(breaks, 7);
        assert!(!matches!(story.blocks.last(), Some(Block::PageBreak)));
    }

    #[test]
    fn chrome_and_metadata_are_fixed() {
        let record = ReportRecord::default();
        let story = build_story(&record, &FormatOptions::default(), build_at());
        assert_eq!(story.meta.page_size, "A4");
        assert_eq!(story.header.brand_mark, "MAYFIN");
        assert_eq!(story.footer.generated_on, "Généré le 29/08/2026 à 09:15");
    }
}
