use super::{amount_or_zero, percent_or_zero};
use crate::config::FormatOptions;
use crate::record::ReportRecord;
use crate::report::blocks::{Block, KeyValueRow};
use crate::rules::score_tone;
use chrono::NaiveDateTime;

const DEFAULT_COMPANY: &str = "Entreprise";
const DEFAULT_ANALYST: &str = "Système d'Analyse IA - MayFin";
const DEFAULT_SCORE: f64 = 50.0;

pub(crate) fn blocks(
    record: &ReportRecord,
    options: &FormatOptions,
    generated_at: NaiveDateTime,
) -> Vec<Block> {
    let company = record.company.as_deref().unwrap_or(DEFAULT_COMPANY);
    let subtitle = match record.project_type.as_deref() {
        Some(kind) if !kind.is_empty() => format!("{company}\n{kind}"),
        _ => company.to_string(),
    };

    let score = record.score.unwrap_or(DEFAULT_SCORE);

    let mut blocks = vec![
        Block::title("RAPPORT D'ANALYSE DE FINANCEMENT"),
        Block::paragraph(subtitle),
        Block::banner(
            format!("SCORE GLOBAL : {}/100", score_text(score)),
            score_tone(score),
        ),
    ];

    blocks.push(Block::KeyValueTable {
        rows: vec![
            KeyValueRow::new(
                "Montant demandé",
                amount_or_zero(record.financed_amount.as_ref(), options),
            ),
            KeyValueRow::new(
                "Apport client",
                amount_or_zero(record.client_contribution.as_ref(), options),
            ),
            KeyValueRow::new(
                "Taux d'apport",
                percent_or_zero(record.contribution_rate.as_ref(), options),
            ),
            KeyValueRow::new(
                "Mensualité estimée",
                amount_or_zero(record.monthly_payment.as_ref(), options),
            ),
        ],
    });

    let analyst = record.analyst.as_deref().unwrap_or(DEFAULT_ANALYST);
    blocks.push(Block::paragraph(format!(
        "Analyste : {analyst}\nDate : {}",
        generated_at.format("%d/%m/%Y")
    )));

    blocks
}

fn score_text(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score}")
    }
}
