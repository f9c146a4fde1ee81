use super::text_or_placeholder;
use crate::config::FormatOptions;
use crate::format::strip_markup;
use crate::record::ReportRecord;
use crate::report::blocks::{Block, KeyValueRow};

const DEFAULT_ASSESSMENT: &str = "Profil du porteur de projet en cours d'évaluation.";

pub(crate) fn blocks(record: &ReportRecord, options: &FormatOptions) -> Vec<Block> {
    let client = &record.client;

    let assessment = match record.profile_assessment.as_deref() {
        Some(text) => strip_markup(Some(text)),
        None => DEFAULT_ASSESSMENT.to_string(),
    };

    vec![
        Block::section("1. IDENTIFICATION DU PORTEUR DE PROJET"),
        Block::KeyValueTable {
            rows: vec![
                KeyValueRow::new(
                    "Nom complet",
                    text_or_placeholder(client.full_name.as_deref(), options),
                ),
                KeyValueRow::new(
                    "Date de naissance",
                    text_or_placeholder(client.birth_date.as_deref(), options),
                ),
                KeyValueRow::new(
                    "Situation familiale",
                    text_or_placeholder(client.family_status.as_deref(), options),
                ),
                KeyValueRow::new(
                    "Expérience professionnelle",
                    text_or_placeholder(client.experience.as_deref(), options),
                ),
                KeyValueRow::new(
                    "Formation",
                    text_or_placeholder(client.education.as_deref(), options),
                ),
            ],
        },
        Block::subsection("Analyse du profil"),
        Block::paragraph(assessment),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_profile_fields_degrade_to_dashes() {
        let record = ReportRecord::default();
        let blocks = blocks(&record, &FormatOptions::default());

        let rows = blocks
            .iter()
            .find_map(|block| match block {
                Block::KeyValueTable { rows } => Some(rows),
                _ => None,
            })
            .expect("profile table present");
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.value == "-"));

        assert!(blocks.iter().any(|block| matches!(
            block,
            Block::Paragraph { text } if text == DEFAULT_ASSESSMENT
        )));
    }

    #[test]
    fn assessment_markup_is_stripped() {
        let mut record = ReportRecord::default();
        record.profile_assessment = Some("Profil <b>solide</b>.".to_string());
        let blocks = blocks(&record, &FormatOptions::default());
        assert!(blocks.iter().any(|block| matches!(
            block,
            Block::Paragraph { text } if text == "Profil solide."
        )));
    }
}
