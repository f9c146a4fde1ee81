use super::text_or_placeholder;
use crate::config::FormatOptions;
use crate::format::strip_markup;
use crate::record::ReportRecord;
use crate::report::blocks::{Block, KeyValueRow};

pub(crate) fn blocks(record: &ReportRecord, options: &FormatOptions) -> Vec<Block> {
    let project = &record.project;

    let mut blocks = vec![
        Block::section("2. PRÉSENTATION DU PROJET"),
        Block::KeyValueTable {
            rows: vec![
                KeyValueRow::new(
                    "Enseigne/Raison sociale",
                    text_or_placeholder(project.brand.as_deref(), options),
                ),
                KeyValueRow::new(
                    "Type de projet",
                    text_or_placeholder(project.kind.as_deref(), options),
                ),
                KeyValueRow::new(
                    "Forme juridique",
                    text_or_placeholder(project.legal_form.as_deref(), options),
                ),
                KeyValueRow::new(
                    "Date de création prévue",
                    text_or_placeholder(project.target_date.as_deref(), options),
                ),
                KeyValueRow::new(
                    "Localisation",
                    text_or_placeholder(project.location.as_deref(), options),
                ),
            ],
        },
    ];

    let activities = strip_markup(project.activities.as_deref());
    if !activities.trim().is_empty() {
        blocks.push(Block::subsection("Activités proposées"));
        blocks.push(Block::paragraph(activities));
    }

    blocks
}
