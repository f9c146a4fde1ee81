use super::{amount_or_zero, percent_or_zero, ZERO};
use crate::config::FormatOptions;
use crate::format::format_raw;
use crate::record::{Figure, ReportRecord, YearSlice};
use crate::report::blocks::{Block, TableRow};
use crate::rules::{dscr_quality, ratio_conformity, Conformity, RatioDirection};

const CONTRIBUTION_RATE_THRESHOLD: f64 = 20.0;
const DEBT_RATE_THRESHOLD: f64 = 70.0;
const GROSS_MARGIN_THRESHOLD: f64 = 30.0;

pub(crate) fn blocks(record: &ReportRecord, options: &FormatOptions) -> Vec<Block> {
    vec![
        Block::section("3. ANALYSE FINANCIÈRE"),
        Block::subsection("3.1 Plan de financement"),
        financing_plan_table(record, options),
        Block::subsection("3.2 Compte de résultat prévisionnel"),
        projections_table(record, options),
        Block::subsection("3.3 Ratios financiers clés"),
        ratios_table(record, options),
    ]
}

fn financing_plan_table(record: &ReportRecord, options: &FormatOptions) -> Block {
    let plan = &record.financing;
    let row = |label: &str, value: Option<&Figure>| {
        TableRow::plain(vec![label.to_string(), amount_or_zero(value, options)])
    };
    let subtotal = |label: &str, value: Option<&Figure>| {
        TableRow::strong(vec![label.to_string(), amount_or_zero(value, options)])
    };

    Block::Table {
        header: vec!["Élément".to_string(), "Montant".to_string()],
        rows: vec![
            row("Investissements matériels", plan.investments.as_ref()),
            row("Besoin en fonds de roulement", plan.working_capital.as_ref()),
            subtotal("Total besoins", plan.total_needs.as_ref()),
            row("Apport personnel", plan.contribution.as_ref()),
            row("Financement bancaire demandé", plan.loan.as_ref()),
            row("Autres financements", plan.other_financing.as_ref()),
            subtotal("Total ressources", plan.total_resources.as_ref()),
        ],
    }
}

fn projections_table(record: &ReportRecord, options: &FormatOptions) -> Block {
    let years = [
        &record.projections.year_one,
        &record.projections.year_two,
        &record.projections.year_three,
    ];
    let row = |label: &str, strong: bool, pick: fn(&YearSlice) -> Option<&Figure>| {
        let mut cells = vec![label.to_string()];
        cells.extend(
            years
                .iter()
                .copied()
                .map(|year| amount_or_zero(pick(year), options)),
        );
        TableRow { cells, strong }
    };

    Block::Table {
        header: vec![
            "Indicateurs".to_string(),
            "Année 1".to_string(),
            "Année 2".to_string(),
            "Année 3".to_string(),
        ],
        rows: vec![
            row("Chiffre d'affaires", false, |year| year.revenue.as_ref()),
            row("Charges variables", false, |year| {
                year.variable_costs.as_ref()
            }),
            row("Marge brute", false, |year| year.gross_margin.as_ref()),
            row("Charges fixes", false, |year| year.fixed_costs.as_ref()),
            row("EBITDA", true, |year| year.ebitda.as_ref()),
            row("Résultat d'exploitation", false, |year| {
                year.operating_result.as_ref()
            }),
            row("Résultat net", true, |year| year.net_result.as_ref()),
        ],
    }
}

fn ratios_table(record: &ReportRecord, options: &FormatOptions) -> Block {
    let ratios = &record.ratios;

    // Percentage ratios default to zero like every other amount, so a missing
    // value both displays as zero and is judged against the threshold as zero.
    let contribution = ratios.contribution_rate.as_ref().unwrap_or(&ZERO);
    let debt = ratios.debt_rate.as_ref().unwrap_or(&ZERO);
    let margin = ratios.gross_margin_rate.as_ref().unwrap_or(&ZERO);

    Block::Table {
        header: vec![
            "Ratio".to_string(),
            "Valeur".to_string(),
            "Standard".to_string(),
            "Analyse".to_string(),
        ],
        rows: vec![
            TableRow::plain(vec![
                "Taux d'apport".to_string(),
                percent_or_zero(Some(contribution), options),
                "> 20%".to_string(),
                ratio_conformity(
                    Some(contribution),
                    CONTRIBUTION_RATE_THRESHOLD,
                    RatioDirection::HigherIsBetter,
                )
                .label()
                .to_string(),
            ]),
            TableRow::plain(vec![
                "Taux d'endettement".to_string(),
                percent_or_zero(Some(debt), options),
                "< 70%".to_string(),
                ratio_conformity(Some(debt), DEBT_RATE_THRESHOLD, RatioDirection::LowerIsBetter)
                    .label()
                    .to_string(),
            ]),
            TableRow::plain(vec![
                "Capacité de remboursement".to_string(),
                amount_or_zero(ratios.repayment_capacity.as_ref(), options),
                options.placeholder.clone(),
                Conformity::Conforming.label().to_string(),
            ]),
            TableRow::plain(vec![
                "DSCR (Année 1)".to_string(),
                format_raw(ratios.dscr.as_ref(), options),
                "> 1,2".to_string(),
                dscr_quality(ratios.dscr.as_ref()).label().to_string(),
            ]),
            TableRow::plain(vec![
                "Taux de marge brute".to_string(),
                percent_or_zero(Some(margin), options),
                "> 30%".to_string(),
                ratio_conformity(
                    Some(margin),
                    GROSS_MARGIN_THRESHOLD,
                    RatioDirection::HigherIsBetter,
                )
                .label()
                .to_string(),
            ]),
        ],
    }
}
