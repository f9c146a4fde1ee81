use chrono::{NaiveDate, NaiveDateTime};
use mayfin_report::config::FormatOptions;
use mayfin_report::record::{Figure, ReportRecord};
use mayfin_report::report::{build_story, Block, BulletMarker};
use mayfin_report::rules::Tone;
use mayfin_report::sample::sample_record;

fn build_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 29)
        .expect("valid date")
        .and_hms_opt(10, 0, 0)
        .expect("valid time")
}

fn score_banner(blocks: &[Block]) -> (&str, Tone) {
    blocks
        .iter()
        .find_map(|block| match block {
            Block::StatusBanner { text, tone } if text.starts_with("SCORE GLOBAL") => {
                Some((text.as_str(), *tone))
            }
            _ => None,
        })
        .expect("score banner present")
}

fn decision_banner(blocks: &[Block]) -> (&str, Tone) {
    blocks
        .iter()
        .find_map(|block| match block {
            Block::StatusBanner { text, tone } if text.starts_with("DÉCISION") => {
                Some((text.as_str(), *tone))
            }
            _ => None,
        })
        .expect("decision banner present")
}

#[test]
fn builders_are_pure() {
    let record = sample_record();
    let options = FormatOptions::default();
    let first = build_story(&record, &options, build_at());
    let second = build_story(&record, &options, build_at());
    assert_eq!(first, second);
}

#[test]
fn score_bands_flow_into_the_cover_banner() {
    let options = FormatOptions::default();
    for (score, expected) in [(85.0, Tone::Success), (50.0, Tone::Warning), (10.0, Tone::Alert)] {
        let mut record = ReportRecord::default();
        record.score = Some(score);
        let story = build_story(&record, &options, build_at());
        let (_, tone) = score_banner(&story.blocks);
        assert_eq!(tone, expected, "score {score}");
    }
}

#[test]
fn decision_bands_flow_into_the_summary_banner() {
    let options = FormatOptions::default();

    let mut record = ReportRecord::default();
    record.recommendation.decision = Some("REFUS".to_string());
    let story = build_story(&record, &options, build_at());
    let (text, tone) = decision_banner(&story.blocks);
    assert_eq!(text, "DÉCISION : REFUS");
    assert_eq!(tone, Tone::Alert);

    let mut record = ReportRecord::default();
    record.recommendation.decision = Some("À ÉTUDIER".to_string());
    let story = build_story(&record, &options, build_at());
    let (_, tone) = decision_banner(&story.blocks);
    assert_eq!(tone, Tone::Warning);
}

#[test]
fn amounts_use_non_breaking_separators_end_to_end() {
    let mut record = ReportRecord::default();
    record.financed_amount = Some(Figure::Number(105_507.0));
    let story = build_story(&record, &FormatOptions::default(), build_at());

    let rows = story
        .blocks
        .iter()
        .find_map(|block| match block {
            Block::KeyValueTable { rows } => Some(rows),
            _ => None,
        })
        .expect("cover summary table present");
    assert_eq!(rows[0].label, "Montant demandé");
    assert_eq!(rows[0].value, "105\u{00A0}507\u{00A0}€");
}

#[test]
fn strength_list_is_truncated_in_order() {
    let mut record = ReportRecord::default();
    record.strengths = (1..=7).map(|index| format!("Atout {index}")).collect();
    let story = build_story(&record, &FormatOptions::default(), build_at());

    let items = story
        .blocks
        .iter()
        .find_map(|block| match block {
            Block::BulletList {
                marker: BulletMarker::Check,
                items,
            } => Some(items),
            _ => None,
        })
        .expect("strength list present");
    let texts: Vec<&str> = items.iter().map(|item| item.text.as_str()).collect();
    assert_eq!(texts, ["Atout 1", "Atout 2", "Atout 3", "Atout 4", "Atout 5"]);
}

#[test]
fn empty_caution_list_produces_no_caution_block() {
    let mut record = ReportRecord::default();
    record.strengths = vec!["Atout".to_string()];
    record.cautions.clear();
    let story = build_story(&record, &FormatOptions::default(), build_at());
    assert!(!story.blocks.iter().any(|block| matches!(
        block,
        Block::BulletList { marker: BulletMarker::Caution, .. }
    )));
}

#[test]
fn french_wire_record_builds_the_expected_ratio_row() {
    let raw = r#"{
        "entreprise": "QUADRA TERRA",
        "score": 50,
        "ratios": {
            "taux_apport": 23.7,
            "taux_endettement": 67.3,
            "capacite_remb": 1956,
            "dscr": "1.51",
            "marge_brute": 33.4
        }
    }"#;
    let record: ReportRecord = serde_json::from_str(raw).expect("wire record decodes");
    let story = build_story(&record, &FormatOptions::default(), build_at());

    let ratio_rows = story
        .blocks
        .iter()
        .find_map(|block| match block {
            Block::Table { header, rows } if header[0] == "Ratio" => Some(rows),
            _ => None,
        })
        .expect("ratio table present");
    let dscr_row = &ratio_rows[3];
    assert_eq!(dscr_row.cells[0], "DSCR (Année 1)");
    assert_eq!(dscr_row.cells[1], "1.51");
    assert_eq!(dscr_row.cells[3], "Excellent");
}

#[test]
fn sample_story_has_the_full_section_catalogue() {
    let story = build_story(&sample_record(), &FormatOptions::default(), build_at());

    let headings: Vec<&str> = story
        .blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    for expected in [
        "RAPPORT D'ANALYSE DE FINANCEMENT",
        "SYNTHÈSE EXÉCUTIVE",
        "1. IDENTIFICATION DU PORTEUR DE PROJET",
        "2. PRÉSENTATION DU PROJET",
        "3. ANALYSE FINANCIÈRE",
        "4. ANALYSE SECTORIELLE",
        "5. RECOMMANDATION BANCAIRE",
        "6. ANNEXES",
    ] {
        assert!(headings.contains(&expected), "missing heading {expected}");
    }

    let breaks = story
        .blocks
        .iter()
        .filter(|block| matches!(block, Block::PageBreak))
        .count();
    assert_eq!(breaks, 7);

    assert_eq!(story.footer.generated_on, "Généré le 29/08/2026 à 10:00");
    assert_eq!(story.meta.title, "Rapport d'Analyse de Financement");
}
