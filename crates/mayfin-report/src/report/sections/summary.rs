use crate::config::FormatOptions;
use crate::record::ReportRecord;
use crate::report::blocks::{Block, BulletItem, BulletMarker};
use crate::rules::decision_tone;

const DEFAULT_DECISION: &str = "À ÉTUDIER";
pub(crate) const STRENGTHS_CAP: usize = 5;
pub(crate) const CAUTIONS_CAP: usize = 5;

pub(crate) fn blocks(record: &ReportRecord, _options: &FormatOptions) -> Vec<Block> {
    let decision = record
        .recommendation
        .decision
        .as_deref()
        .unwrap_or(DEFAULT_DECISION);

    let mut blocks = vec![
        Block::section("SYNTHÈSE EXÉCUTIVE"),
        Block::banner(format!("DÉCISION : {decision}"), decision_tone(decision)),
    ];

    if !record.strengths.is_empty() {
        blocks.push(Block::subsection("Points clés"));
        blocks.push(Block::BulletList {
            marker: BulletMarker::Check,
            items: record
                .strengths
                .iter()
                .take(STRENGTHS_CAP)
                .map(|item| BulletItem::plain(item.clone()))
                .collect(),
        });
    }

    if !record.cautions.is_empty() {
        blocks.push(Block::subsection("Points d'attention"));
        blocks.push(Block::BulletList {
            marker: BulletMarker::Caution,
            items: record
                .cautions
                .iter()
                .take(CAUTIONS_CAP)
                .map(|item| BulletItem::plain(item.clone()))
                .collect(),
        });
    }

    blocks
}
