use crate::config::FormatOptions;
use crate::record::ReportRecord;
use crate::report::blocks::{Block, BulletItem, BulletMarker};

pub(crate) const SOURCES_CAP: usize = 10;

const METHODOLOGY: &str = "Cette analyse a été réalisée selon les standards MayFin en utilisant \
une approche multi-critères combinant l'analyse financière, l'évaluation du porteur de projet, \
l'analyse sectorielle et l'évaluation des risques. Les ratios utilisés sont conformes aux normes \
bancaires et réglementaires (Bâle III/IV, recommandations BCE).";

const LEGAL_NOTICE: &str = "Ce document est confidentiel et destiné exclusivement à un usage \
interne MayFin. Les informations contenues dans ce rapport sont basées sur les documents fournis \
par le client et l'analyse automatisée par intelligence artificielle. Elles ne constituent pas un \
engagement définitif de financement. Toute décision finale reste soumise à l'approbation des \
comités d'engagement compétents et à la vérification complète du dossier.";

pub(crate) fn blocks(record: &ReportRecord, _options: &FormatOptions) -> Vec<Block> {
    let mut blocks = vec![
        Block::section("6. ANNEXES"),
        Block::subsection("6.1 Méthodologie d'analyse"),
        Block::paragraph(METHODOLOGY),
    ];

    if !record.sources.is_empty() {
        blocks.push(Block::subsection("6.2 Sources documentaires"));
        blocks.push(Block::BulletList {
            marker: BulletMarker::Numbered,
            items: record
                .sources
                .iter()
                .take(SOURCES_CAP)
                .map(|item| BulletItem::plain(item.clone()))
                .collect(),
        });
    }

    blocks.push(Block::subsection("6.3 Mentions légales"));
    blocks.push(Block::paragraph(LEGAL_NOTICE));

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_are_numbered_and_capped() {
        let mut record = ReportRecord::default();
        record.sources = (1..=12).map(|index| format!("Source {index}")).collect();

        let blocks = blocks(&record, &FormatOptions::default());
        let items = blocks
            .iter()
            .find_map(|block| match block {
                Block::BulletList {
                    marker: BulletMarker::Numbered,
                    items,
                } => Some(items),
                _ => None,
            })
            .expect("sources list present");
        assert_eq!(items.len(), SOURCES_CAP);
        assert_eq!(items[0].text, "Source 1");
        assert_eq!(items[9].text, "Source 10");
    }

    #[test]
    fn fixed_paragraphs_are_always_present() {
        let record = ReportRecord::default();
        let blocks = blocks(&record, &FormatOptions::default());
        assert!(blocks.iter().any(|block| matches!(
            block,
            Block::Paragraph { text } if text.starts_with("Cette analyse")
        )));
        assert!(blocks.iter().any(|block| matches!(
            block,
            Block::Paragraph { text } if text.starts_with("Ce document est confidentiel")
        )));
        assert!(!blocks.iter().any(|block| matches!(
            block,
            Block::Heading { text, .. } if text == "6.2 Sources documentaires"
        )));
    }
}
