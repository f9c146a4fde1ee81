use crate::config::FormatOptions;
use crate::format::strip_markup;
use crate::record::ReportRecord;
use crate::report::blocks::{Block, BulletItem, BulletMarker};
use crate::rules::impact_tone;

const DEFAULT_CONTEXT: &str = "Analyse du secteur en cours.";
const DEFAULT_IMPACT: &str = "moyen";
pub(crate) const RISKS_CAP: usize = 8;
pub(crate) const OPPORTUNITIES_CAP: usize = 5;

pub(crate) fn blocks(record: &ReportRecord, _options: &FormatOptions) -> Vec<Block> {
    let sector = &record.sector;

    let context = match sector.market_context.as_deref() {
        Some(text) => strip_markup(Some(text)),
        None => DEFAULT_CONTEXT.to_string(),
    };

    let mut blocks = vec![
        Block::section("4. ANALYSE SECTORIELLE"),
        Block::subsection("4.1 Contexte de marché"),
        Block::paragraph(context),
        Block::subsection("4.2 Risques sectoriels identifiés"),
    ];

    if !sector.risks.is_empty() {
        let items = sector
            .risks
            .iter()
            .take(RISKS_CAP)
            .map(|risk| {
                let title = risk.title.as_deref().unwrap_or_default();
                let description = risk.description.as_deref().unwrap_or_default();
                let impact = risk.impact.as_deref().unwrap_or(DEFAULT_IMPACT);
                BulletItem::toned(format!("{title} : {description}"), impact_tone(impact))
            })
            .collect();
        blocks.push(Block::BulletList {
            marker: BulletMarker::Square,
            items,
        });
    }

    blocks.push(Block::subsection("4.3 Opportunités de développement"));
    if !sector.opportunities.is_empty() {
        blocks.push(Block::BulletList {
            marker: BulletMarker::Check,
            items: sector
                .opportunities
                .iter()
                .take(OPPORTUNITIES_CAP)
                .map(|item| BulletItem::plain(item.clone()))
                .collect(),
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SectorRisk;
    use crate::rules::Tone;

    fn risk(title: &str, impact: Option<&str>) -> SectorRisk {
        SectorRisk {
            title: Some(title.to_string()),
            description: Some("description".to_string()),
            impact: impact.map(str::to_string),
        }
    }

    #[test]
    fn risks_are_capped_and_toned() {
        let mut record = ReportRecord::default();
        record.sector.risks = (0..10)
            .map(|index| risk(&format!("Risque {index}"), Some("élevé")))
            .collect();

        let blocks = blocks(&record, &FormatOptions::default());
        let items = blocks
            .iter()
            .find_map(|block| match block {
                Block::BulletList {
                    marker: BulletMarker::Square,
                    items,
                } => Some(items),
                _ => None,
            })
            .expect("risk list present");
        assert_eq!(items.len(), RISKS_CAP);
        assert_eq!(items[0].text, "Risque 0 : description");
        assert!(items.iter().all(|item| item.tone == Some(Tone::Alert)));
    }

    #[test]
    fn missing_impact_defaults_to_medium() {
        let mut record = ReportRecord::default();
        record.sector.risks = vec![risk("Risque", None)];
        let blocks = blocks(&record, &FormatOptions::default());
        let items = blocks
            .iter()
            .find_map(|block| match block {
                Block::BulletList { items, .. } => Some(items),
                _ => None,
            })
            .expect("risk list present");
        assert_eq!(items[0].tone, Some(Tone::Warning));
    }

    #[test]
    fn empty_lists_keep_headings_but_emit_no_lists() {
        let record = ReportRecord::default();
        let blocks = blocks(&record, &FormatOptions::default());
        assert!(!blocks
            .iter()
            .any(|block| matches!(block, Block::BulletList { .. })));
        assert!(blocks.iter().any(|block| matches!(
            block,
            Block::Paragraph { text } if text == DEFAULT_CONTEXT
        )));
    }
}
