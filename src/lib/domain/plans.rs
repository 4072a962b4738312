//! Subscription plan catalog

use std::fmt;

/// Identifier of a subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanId {
    /// Free entry-level plan
    Starter,

    /// Mid-tier plan
    Pro,

    /// Top-tier plan
    Premium,
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanId::Starter => write!(f, "STARTER"),
            PlanId::Pro => write!(f, "PRO"),
            PlanId::Premium => write!(f, "PREMIUM"),
        }
    }
}

/// A subscription plan with its display attributes.
///
/// The catalog is static data fixed at compile time; features render in
/// declaration order.
#[derive(Debug, PartialEq, Eq)]
pub struct PlanTier {
    /// Plan identifier
    pub id: PlanId,

    /// Display label
    pub label: &'static str,

    /// Monthly price, formatted
    pub price: &'static str,

    /// Billing period suffix
    pub period: &'static str,

    /// Ordered list of plan benefits
    pub features: &'static [&'static str],
}

static STARTER: PlanTier = PlanTier {
    id: PlanId::Starter,
    label: "Starter",
    price: "0€",
    period: "/mois",
    features: &[
        "2 sessions simultanées",
        "1 parent + 1 enfant",
        "Accès complet à la plateforme",
        "Programmation, IA, maths et lecture",
        "Jeux éducatifs et progression",
        "Évaluation et coaching IA basique",
        "3 mois gratuit puis 9,99€/mois",
    ],
};

static PRO: PlanTier = PlanTier {
    id: PlanId::Pro,
    label: "Pro",
    price: "29,99€",
    period: "/mois",
    features: &[
        "2 sessions simultanées",
        "1 parent + 1 enfant",
        "Tous les exercices et contenus",
        "Communauté et défis familiaux",
        "Stats détaillées et rapports",
        "Certificats de progression",
        "IA coach personnalisé",
        "Support par email",
    ],
};

static PREMIUM: PlanTier = PlanTier {
    id: PlanId::Premium,
    label: "Premium",
    price: "69,99€",
    period: "/mois",
    features: &[
        "6 sessions simultanées",
        "1 parent + jusqu'à 5 enfants",
        "IA coach Premium avancé",
        "Certificats officiels reconnus",
        "Exports PDF/Excel détaillés",
        "Multi-appareils synchronisés",
        "Support prioritaire 24/7",
        "Programme de parrainage",
        "Contenus exclusifs",
    ],
};

impl PlanTier {
    /// Looks up a plan by identifier, case-insensitively.
    ///
    /// Unrecognized identifiers resolve to [`PlanId::Starter`] rather than
    /// failing: a wrong plan label must never block a welcome email.
    pub fn resolve(identifier: &str) -> &'static PlanTier {
        match identifier.trim().to_ascii_uppercase().as_str() {
            "STARTER" => &STARTER,
            "PRO" => &PRO,
            "PREMIUM" => &PREMIUM,
            _ => &STARTER,
        }
    }
}
