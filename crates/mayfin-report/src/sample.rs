//! Built-in sample dossier (Quadra Terra) backing the CLI fallback mode and
//! end-to-end tests.

use crate::record::{
    ClientProfile, FinancialRatios, FinancingPlan, ProjectProfile, Projections, Recommendation,
    RecommendedProduct, ReportRecord, SectorAnalysis, SectorRisk, YearSlice,
};

fn risk(title: &str, description: &str, impact: &str) -> SectorRisk {
    SectorRisk {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        impact: Some(impact.to_string()),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Complete example record for a franchise financing dossier.
pub fn sample_record() -> ReportRecord {
    ReportRecord {
        company: Some("QUADRA TERRA - Agence Sud de Paris".to_string()),
        project_type: Some(
            "Franchise - Paysagisme écoresponsable, Potagers & Serres".to_string(),
        ),
        score: Some(50.0),
        analyst: Some("Système d'Analyse IA - MayFin".to_string()),
        client: ClientProfile {
            full_name: Some("Lucas MIRGALET".to_string()),
            birth_date: Some("09/01/1982".to_string()),
            family_status: Some("Marié, 2 enfants".to_string()),
            experience: Some(
                "Infrastructure et construction (Systra, Vinci, Bureau Veritas), direction \
                 commerciale et générale de 2 PME en rénovation énergétique"
                    .to_string(),
            ),
            education: Some("Ingénieur ENPC + MBA".to_string()),
        },
        profile_assessment: Some(
            "Le porteur de projet présente un profil solide avec une formation d'ingénieur \
             complétée par un MBA, et une expérience significative dans le secteur de la \
             construction et de l'infrastructure. Son parcours entrepreneurial antérieur et sa \
             direction de PME dans la rénovation énergétique constituent des atouts majeurs pour \
             ce projet de franchise dans le paysagisme écoresponsable."
                .to_string(),
        ),
        project: ProjectProfile {
            brand: Some("QUADRA TERRA".to_string()),
            kind: Some(
                "Franchise - Paysagisme écoresponsable, Potagers & Serres (2ème agence \
                 Île-de-France)"
                    .to_string(),
            ),
            legal_form: Some("SASU".to_string()),
            target_date: Some("2026".to_string()),
            location: Some("7 rue la Boissière, 92260 Fontenay-aux-Roses (55 m²)".to_string()),
            activities: Some(
                "Jardins écoresponsables (récupération d'eau de pluie, terrasses bois, \
                 micro-forêts), jardins nourriciers (potagers, serres, poulaillers, vergers), \
                 entretien écologique."
                    .to_string(),
            ),
        },
        financed_amount: Some(105_507.into()),
        client_contribution: Some(25_000.into()),
        contribution_rate: Some(23.7.into()),
        monthly_payment: Some(1_519.into()),
        financing: FinancingPlan {
            investments: Some(100_507.into()),
            working_capital: Some(56_101.into()),
            total_needs: Some(156_608.into()),
            contribution: Some(25_000.into()),
            loan: Some(105_507.into()),
            other_financing: Some(26_101.into()),
            total_resources: Some(156_608.into()),
        },
        projections: Projections {
            year_one: YearSlice {
                revenue: Some(209_895.into()),
                variable_costs: Some(139_751.into()),
                gross_margin: Some(70_144.into()),
                fixed_costs: Some(38_804.into()),
                ebitda: Some(30_250.into()),
                operating_result: Some(8_314.into()),
                net_result: Some(3_302.into()),
            },
            year_two: YearSlice {
                revenue: Some(450_532.into()),
                variable_costs: Some(300_290.into()),
                gross_margin: Some(150_243.into()),
                fixed_costs: Some(51_711.into()),
                ebitda: Some(54_235.into()),
                operating_result: Some(29_437.into()),
                net_result: Some(21_864.into()),
            },
            year_three: YearSlice {
                revenue: Some(695_879.into()),
                variable_costs: Some(424_794.into()),
                gross_margin: Some(271_085.into()),
                fixed_costs: Some(56_240.into()),
                ebitda: Some(148_567.into()),
                operating_result: Some(122_476.into()),
                net_result: Some(93_882.into()),
            },
        },
        ratios: FinancialRatios {
            contribution_rate: Some(23.7.into()),
            debt_rate: Some(67.3.into()),
            repayment_capacity: Some(1_956.into()),
            dscr: Some("1.51".into()),
            gross_margin_rate: Some(33.4.into()),
        },
        sector: SectorAnalysis {
            market_context: Some(
                "Le secteur du paysage connaît une dynamique favorable avec un chiffre \
                 d'affaires de 7,7 milliards d'euros HT en 2022 et une croissance de +21% sur \
                 2020-2022. Le marché bénéficie de tendances structurelles favorables : prise de \
                 conscience écologique, développement de l'agriculture urbaine et des jardins \
                 nourriciers, avantages fiscaux (crédit d'impôt de 50% via les Services à la \
                 Personne). La zone de chalandise (Sud Hauts-de-Seine) présente un potentiel \
                 attractif avec plus de 40 000 maisons individuelles et une population CSP+ de \
                 932 611 habitants."
                    .to_string(),
            ),
            risks: vec![
                risk(
                    "Délais administratifs",
                    "Les autorisations environnementales peuvent impacter la trésorerie et la \
                     rentabilité",
                    "élevé",
                ),
                risk(
                    "Volatilité énergétique",
                    "Coûts imprévisibles pour le chauffage des serres, risque majeur pour les \
                     marges",
                    "élevé",
                ),
                risk(
                    "Dépendance aux compétences",
                    "Pénurie de main-d'œuvre qualifiée en écologie et aménagement durable",
                    "moyen",
                ),
                risk(
                    "Tensions d'approvisionnement",
                    "Disponibilité limitée des matériaux de construction pour serres et potagers",
                    "moyen",
                ),
                risk(
                    "Risques climatiques",
                    "Impact du réchauffement climatique sur les cultures et la gestion de l'eau",
                    "moyen",
                ),
                risk(
                    "Concurrence accrue",
                    "44 entreprises concurrentes identifiées, marché fragmenté avec nouveaux \
                     entrants",
                    "moyen",
                ),
            ],
            opportunities: strings(&[
                "Expansion des carrières vertes et de l'agriculture durable (MaPrimeRénov', \
                 France 2030)",
                "Demande croissante pour jardins écologiques et potagers biologiques",
                "Innovations techniques (taille d'arbres fruitiers hivernale/estivale) pour \
                 optimiser la productivité",
                "Aides publiques (éco-PTZ, CEE, BPI) pour le financement de projets paysage \
                 durable",
                "Tendances vers le jardinage durable et la préservation de l'environnement",
            ]),
        },
        recommendation: Recommendation {
            decision: Some("À ÉTUDIER AVEC RÉSERVES".to_string()),
            product: Some(RecommendedProduct {
                name: Some("Location Longue Durée (LLD)".to_string()),
                kind: Some("ARVAL - Location Longue Durée".to_string()),
                duration: Some("36 à 48 mois".to_string()),
                amount: Some(80_507.into()),
                benefits: strings(&[
                    "Loyers fixes et prévisibles sur toute la durée",
                    "Entretien et maintenance inclus",
                    "Assurance et assistance intégrées",
                    "Gestion de flotte simplifiée",
                    "Pas d'immobilisation de trésorerie",
                    "TVA récupérable sur les loyers",
                ]),
            }),
            conditions: strings(&[
                "Réduire le montant demandé à 80 000 € maximum (vs 105 507 € demandé)",
                "Augmenter l'apport personnel de 25 000 € à 35 000 € minimum (taux d'apport \
                 cible > 25%)",
                "Privilégier la Location Longue Durée pour les véhicules afin d'optimiser la \
                 trésorerie",
                "Prévoir une alternative crédit-bail véhicule si le client souhaite être \
                 propriétaire à terme",
            ]),
            decision_justification: Some(
                "Le dossier présente des fondamentaux intéressants (profil du porteur, marché \
                 porteur, positionnement différenciant) mais nécessite des ajustements pour être \
                 conforme aux critères de financement. Le montant demandé (105 507 €) dépasse le \
                 seuil accordable actuel. Une restructuration du plan de financement avec \
                 augmentation de l'apport et utilisation de la LLD permettrait de sécuriser le \
                 projet tout en optimisant la trésorerie."
                    .to_string(),
            ),
        },
        strengths: strings(&[
            "Profil solide : ingénieur MBA avec expérience en direction d'entreprise et \
             développement commercial",
            "Marché porteur : secteur paysage +21% de croissance, tendances favorables \
             (écologie, autoconsommation)",
            "Avantage fiscal majeur : crédit d'impôt immédiat de 50% pour les clients (Services \
             à la Personne)",
            "Zone attractive : 932 611 habitants CSP+, plus de 40 000 maisons individuelles",
            "Accompagnement réseau : formation complète, outils digitaux, centrale d'achats, \
             support permanent",
        ]),
        cautions: strings(&[
            "Montant demandé (105 507 €) supérieur au seuil accordable",
            "Taux d'apport de 23,7% inférieur au standard recommandé (> 25%)",
            "Risques sectoriels : délais administratifs, volatilité énergétique, pénurie de \
             main-d'œuvre qualifiée",
            "Concurrence locale élevée (44 entreprises identifiées)",
            "Dépendance aux aides publiques et politiques de transition écologique",
        ]),
        sources: strings(&[
            "Fiche client Quadra Terra - Document interne",
            "INSEE - Données démographiques Sud Hauts-de-Seine",
            "UNEP - Chiffres clés du secteur paysage 2022",
            "BPI France - Guide financement création entreprise",
            "Banque de France - Ratios sectoriels paysagisme",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Figure;

    #[test]
    fn sample_totals_are_carried_as_given() {
        let record = sample_record();
        assert_eq!(record.financing.total_needs, Some(Figure::Number(156_608.0)));
        assert_eq!(
            record.financing.total_resources,
            Some(Figure::Number(156_608.0))
        );
        assert_eq!(record.ratios.dscr, Some(Figure::Text("1.51".to_string())));
    }
}
