use super::{amount_or_zero, text_or_placeholder};
use crate::config::FormatOptions;
use crate::format::strip_markup;
use crate::record::ReportRecord;
use crate::report::blocks::{Block, BulletItem, BulletMarker, KeyValueRow};

const NO_ADJUSTMENT: &str = "Aucun ajustement majeur nécessaire.";
const DEFAULT_JUSTIFICATION: &str = "Dossier conforme aux critères de financement.";

pub(crate) fn blocks(record: &ReportRecord, options: &FormatOptions) -> Vec<Block> {
    let recommendation = &record.recommendation;
    let mut blocks = vec![Block::section("5. RECOMMANDATION BANCAIRE")];

    if let Some(product) = &recommendation.product {
        blocks.push(Block::subsection("5.1 Produit recommandé"));
        blocks.push(Block::KeyValueTable {
            rows: vec![
                KeyValueRow::new("Produit", text_or_placeholder(product.name.as_deref(), options)),
                KeyValueRow::new("Type", text_or_placeholder(product.kind.as_deref(), options)),
                KeyValueRow::new(
                    "Durée recommandée",
                    text_or_placeholder(product.duration.as_deref(), options),
                ),
                KeyValueRow::new("Montant", amount_or_zero(product.amount.as_ref(), options)),
            ],
        });

        if !product.benefits.is_empty() {
            blocks.push(Block::subsection("Avantages"));
            blocks.push(Block::BulletList {
                marker: BulletMarker::Dot,
                items: product
                    .benefits
                    .iter()
                    .map(|item| BulletItem::plain(item.clone()))
                    .collect(),
            });
        }
    }

    blocks.push(Block::subsection("5.2 Conditions et ajustements recommandés"));
    if recommendation.conditions.is_empty() {
        blocks.push(Block::paragraph(NO_ADJUSTMENT));
    } else {
        blocks.push(Block::BulletList {
            marker: BulletMarker::Arrow,
            items: recommendation
                .conditions
                .iter()
                .map(|item| BulletItem::plain(item.clone()))
                .collect(),
        });
    }

    blocks.push(Block::subsection("5.3 Décision"));
    let justification = match recommendation.decision_justification.as_deref() {
        Some(text) => strip_markup(Some(text)),
        None => DEFAULT_JUSTIFICATION.to_string(),
    };
    blocks.push(Block::paragraph(justification));

    blocks
}
