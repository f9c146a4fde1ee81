//! Table-driven status derivation.
//!
//! Each function maps one author-supplied value against fixed banking-style
//! cutoffs and returns a named tone or quality label. The record is free-form
//! data, not a validated schema, so every rule degrades to a neutral result
//! on malformed input instead of failing.

use crate::format::parse_numeric;
use crate::record::Figure;
use serde::Serialize;

/// Named palette returned by the rule engine. The renderer owns the mapping
/// from tone to an actual visual value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Alert,
    Neutral,
    BrandPrimary,
    BrandSecondary,
}

/// Bands the global score: 70 and above reads as solid, 50 as mixed,
/// anything below as alarming. Out-of-range scores band the same way.
pub fn score_tone(score: f64) -> Tone {
    if score >= 70.0 {
        Tone::Success
    } else if score >= 50.0 {
        Tone::Warning
    } else {
        Tone::Alert
    }
}

/// Bands a decision label. Only the canonical labels are recognized; any
/// other wording reads as a qualified decision.
pub fn decision_tone(decision: &str) -> Tone {
    match decision.trim() {
        "FAVORABLE" | "ACCORD" => Tone::Success,
        "REFUS" | "DÉFAVORABLE" => Tone::Alert,
        _ => Tone::Warning,
    }
}

/// Bands a sector-risk severity tag, case-insensitively. Both the French
/// wording of the upstream pipeline and the English equivalents are accepted.
pub fn impact_tone(impact: &str) -> Tone {
    match impact.trim().to_lowercase().as_str() {
        "élevé" | "high" => Tone::Alert,
        "moyen" | "medium" => Tone::Warning,
        "faible" | "low" => Tone::Success,
        _ => Tone::Neutral,
    }
}

/// Whether a ratio is healthy above or below its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioDirection {
    HigherIsBetter,
    LowerIsBetter,
}

/// Outcome of comparing a ratio against its standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conformity {
    Conforming,
    NeedsImprovement,
    Elevated,
    Unknown,
}

impl Conformity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conforming => "Conforme",
            Self::NeedsImprovement => "À améliorer",
            Self::Elevated => "Élevé",
            Self::Unknown => "-",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Conforming => Tone::Success,
            Self::NeedsImprovement => Tone::Warning,
            Self::Elevated => Tone::Alert,
            Self::Unknown => Tone::Neutral,
        }
    }
}

/// Compares a ratio value against a threshold. Strings may carry `%`, spaces
/// or a decimal comma; anything unparsable yields [`Conformity::Unknown`].
pub fn ratio_conformity(
    value: Option<&Figure>,
    threshold: f64,
    direction: RatioDirection,
) -> Conformity {
    let Some(parsed) = figure_numeric(value) else {
        return Conformity::Unknown;
    };

    match direction {
        RatioDirection::HigherIsBetter => {
            if parsed >= threshold {
                Conformity::Conforming
            } else {
                Conformity::NeedsImprovement
            }
        }
        RatioDirection::LowerIsBetter => {
            if parsed <= threshold {
                Conformity::Conforming
            } else {
                Conformity::Elevated
            }
        }
    }
}

/// DSCR quality bands; contiguous and exhaustive over the real line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DscrQuality {
    Excellent,
    Good,
    Marginal,
    Insufficient,
    Unknown,
}

impl DscrQuality {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Bon",
            Self::Marginal => "Limite",
            Self::Insufficient => "Insuffisant",
            Self::Unknown => "-",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Excellent | Self::Good => Tone::Success,
            Self::Marginal => Tone::Warning,
            Self::Insufficient => Tone::Alert,
            Self::Unknown => Tone::Neutral,
        }
    }
}

/// Bands a debt-service coverage ratio supplied as a number or decimal
/// string (dot or comma notation).
pub fn dscr_quality(value: Option<&Figure>) -> DscrQuality {
    let Some(parsed) = figure_numeric(value) else {
        return DscrQuality::Unknown;
    };

    if parsed >= 1.5 {
        DscrQuality::Excellent
    } else if parsed >= 1.2 {
        DscrQuality::Good
    } else if parsed >= 1.0 {
        DscrQuality::Marginal
    } else {
        DscrQuality::Insufficient
    }
}

fn figure_numeric(value: Option<&Figure>) -> Option<f64> {
    match value {
        None => None,
        Some(Figure::Number(n)) => Some(*n),
        Some(Figure::Text(s)) => parse_numeric(&s.replace('%', "")),
    }
}
