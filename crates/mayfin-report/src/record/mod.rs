//! Input data model for one report build.
//!
//! The record arrives as UTF-8 JSON with the French field names of the
//! upstream analysis pipeline; `#[serde(rename)]` maps them onto the crate's
//! names. Every leaf is optional and unknown fields are ignored: a sparse or
//! over-full record must still build a report, degrading field by field to
//! placeholders rather than failing. The record is never mutated during a
//! build.

use serde::Deserialize;

/// A numeric-looking value as supplied by the author: either a real number
/// or a string that may carry separators, a unit symbol or garbage. Parsing
/// is deferred to the formatter and rule engine so a malformed value only
/// degrades the cell it appears in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Figure {
    Number(f64),
    Text(String),
}

impl From<f64> for Figure {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Figure {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Figure {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Root of the financing-analysis record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportRecord {
    #[serde(rename = "entreprise")]
    pub company: Option<String>,
    #[serde(rename = "type_projet")]
    pub project_type: Option<String>,
    /// Global score, expected in 0..=100 but banded as-is when out of range.
    pub score: Option<f64>,
    #[serde(rename = "analyste")]
    pub analyst: Option<String>,
    #[serde(default)]
    pub client: ClientProfile,
    #[serde(rename = "profil_analyse")]
    pub profile_assessment: Option<String>,
    #[serde(rename = "projet", default)]
    pub project: ProjectProfile,
    #[serde(rename = "montant_finance")]
    pub financed_amount: Option<Figure>,
    #[serde(rename = "apport_client")]
    pub client_contribution: Option<Figure>,
    #[serde(rename = "taux_apport")]
    pub contribution_rate: Option<Figure>,
    #[serde(rename = "mensualite")]
    pub monthly_payment: Option<Figure>,
    #[serde(rename = "financement", default)]
    pub financing: FinancingPlan,
    #[serde(rename = "previsionnels", default)]
    pub projections: Projections,
    #[serde(default)]
    pub ratios: FinancialRatios,
    #[serde(rename = "secteur", default)]
    pub sector: SectorAnalysis,
    #[serde(default)]
    pub recommendation: Recommendation,
    #[serde(rename = "points_forts", default)]
    pub strengths: Vec<String>,
    #[serde(rename = "alertes", default)]
    pub cautions: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Identity and background of the project holder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientProfile {
    #[serde(rename = "nom")]
    pub full_name: Option<String>,
    #[serde(rename = "date_naissance")]
    pub birth_date: Option<String>,
    #[serde(rename = "situation_familiale")]
    pub family_status: Option<String>,
    pub experience: Option<String>,
    #[serde(rename = "formation")]
    pub education: Option<String>,
}

/// Descriptive facts about the financed project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectProfile {
    #[serde(rename = "enseigne")]
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "forme_juridique")]
    pub legal_form: Option<String>,
    #[serde(rename = "date_creation")]
    pub target_date: Option<String>,
    #[serde(rename = "localisation")]
    pub location: Option<String>,
    #[serde(rename = "activites")]
    pub activities: Option<String>,
}

/// Needs and resources of the financing plan. The two totals are trusted as
/// given; no arithmetic cross-check against the listed components.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinancingPlan {
    #[serde(rename = "investissements")]
    pub investments: Option<Figure>,
    #[serde(rename = "bfr")]
    pub working_capital: Option<Figure>,
    #[serde(rename = "total_besoins")]
    pub total_needs: Option<Figure>,
    #[serde(rename = "apport")]
    pub contribution: Option<Figure>,
    #[serde(rename = "emprunt")]
    pub loan: Option<Figure>,
    #[serde(rename = "autres")]
    pub other_financing: Option<Figure>,
    #[serde(rename = "total_ressources")]
    pub total_resources: Option<Figure>,
}

/// Three-year projected income statement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Projections {
    #[serde(rename = "annee1", default)]
    pub year_one: YearSlice,
    #[serde(rename = "annee2", default)]
    pub year_two: YearSlice,
    #[serde(rename = "annee3", default)]
    pub year_three: YearSlice,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct YearSlice {
    #[serde(rename = "ca")]
    pub revenue: Option<Figure>,
    #[serde(rename = "charges_var")]
    pub variable_costs: Option<Figure>,
    #[serde(rename = "marge")]
    pub gross_margin: Option<Figure>,
    #[serde(rename = "charges_fixes")]
    pub fixed_costs: Option<Figure>,
    pub ebitda: Option<Figure>,
    #[serde(rename = "rex")]
    pub operating_result: Option<Figure>,
    #[serde(rename = "rnet")]
    pub net_result: Option<Figure>,
}

/// Key banking ratios. DSCR frequently arrives as a decimal string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinancialRatios {
    #[serde(rename = "taux_apport")]
    pub contribution_rate: Option<Figure>,
    #[serde(rename = "taux_endettement")]
    pub debt_rate: Option<Figure>,
    #[serde(rename = "capacite_remb")]
    pub repayment_capacity: Option<Figure>,
    pub dscr: Option<Figure>,
    #[serde(rename = "marge_brute")]
    pub gross_margin_rate: Option<Figure>,
}

/// Market context plus ordered risk and opportunity lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectorAnalysis {
    #[serde(rename = "contexte")]
    pub market_context: Option<String>,
    #[serde(rename = "risques", default)]
    pub risks: Vec<SectorRisk>,
    #[serde(rename = "opportunites", default)]
    pub opportunities: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectorRisk {
    #[serde(rename = "titre")]
    pub title: Option<String>,
    pub description: Option<String>,
    /// Severity tag, matched case-insensitively by the rule engine.
    pub impact: Option<String>,
}

/// Bank recommendation: decision label, optional product, conditions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Recommendation {
    pub decision: Option<String>,
    #[serde(rename = "produit")]
    pub product: Option<RecommendedProduct>,
    #[serde(default)]
    pub conditions: Vec<String>,
    pub decision_justification: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendedProduct {
    #[serde(rename = "nom")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "duree")]
    pub duration: Option<String>,
    #[serde(rename = "montant")]
    pub amount: Option<Figure>,
    #[serde(rename = "avantages", default)]
    pub benefits: Vec<String>,
}
