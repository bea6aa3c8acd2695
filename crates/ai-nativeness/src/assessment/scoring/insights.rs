//! Ranking of categories into strengths and constraints, plus the one-line profile summary.
//!
//! Rankings use stable sorts so that categories with equal means keep catalog order.

use super::aggregate::{CategoryScore, CategoryScores};
use crate::assessment::catalog::{
    DATA_INFRASTRUCTURE, SKILLS_LEARNING, STRATEGY_CULTURE, TOOLS_AUTOMATION,
};
use crate::assessment::narrative::NarrativeCatalog;
use serde::Serialize;

/// Size of the strongest/weakest windows.
pub const RANKING_WINDOW: usize = 3;
pub const STRENGTH_FLOOR: f64 = 3.0;
pub const CONSTRAINT_CEILING: f64 = 3.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub score: f64,
}

impl From<&CategoryScore> for RankedCategory {
    fn from(score: &CategoryScore) -> Self {
        Self {
            id: score.id,
            name: score.name,
            score: score.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInsights {
    pub strongest: Vec<RankedCategory>,
    /// Lowest mean first.
    pub weakest: Vec<RankedCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Strength {
    pub id: &'static str,
    pub name: &'static str,
    pub score: f64,
    pub interpretation: String,
    pub impact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintSeverity {
    Critical,
    Warning,
    Moderate,
}

impl ConstraintSeverity {
    pub fn for_score(score: f64) -> Self {
        if score < 2.0 {
            Self::Critical
        } else if score < 3.0 {
            Self::Warning
        } else {
            Self::Moderate
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Moderate => "moderate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constraint {
    pub id: &'static str,
    pub name: &'static str,
    pub score: f64,
    pub severity: ConstraintSeverity,
    pub interpretation: String,
    pub impact: String,
    pub cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InconsistentCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub score: f64,
    pub variance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternTemplate {
    FragileProgress,
    TechnicalDebtRisk,
    EarlyExploration,
    StrongFoundation,
    SystematicProgress,
}

impl PatternTemplate {
    pub const fn title(self) -> &'static str {
        match self {
            Self::FragileProgress => {
                "High individual energy + Low organizational structure = Fragile progress"
            }
            Self::TechnicalDebtRisk => "Active tool usage + Weak foundation = Technical debt risk",
            Self::EarlyExploration => "Early exploration phase",
            Self::StrongFoundation => "Strong foundation in place",
            Self::SystematicProgress => "Building AI capabilities systematically",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::FragileProgress => "This is common for teams at your stage. The good news is that you have the raw ingredients (skills, interest). The opportunity is to add structure around them.",
            Self::TechnicalDebtRisk => "Your team is using AI actively, but the underlying infrastructure isn't keeping up. This creates risk of brittle solutions that are hard to maintain.",
            Self::EarlyExploration => "You're at the beginning of the AI journey. The key now is to build foundations: alignment, skills, and basic practices before scaling up.",
            Self::StrongFoundation => "You have solid capabilities across multiple areas. The opportunity is to scale what's working and address remaining gaps systematically.",
            Self::SystematicProgress => "You're making progress across multiple dimensions. The key is to maintain momentum while addressing the specific gaps that hold you back.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallPattern {
    pub template: PatternTemplate,
    pub title: &'static str,
    pub description: &'static str,
}

impl From<PatternTemplate> for OverallPattern {
    fn from(template: PatternTemplate) -> Self {
        Self {
            template,
            title: template.title(),
            description: template.description(),
        }
    }
}

fn descending(scores: &CategoryScores) -> Vec<&CategoryScore> {
    let mut sorted: Vec<_> = scores.iter().collect();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
    sorted
}

fn ascending(scores: &CategoryScores) -> Vec<&CategoryScore> {
    let mut sorted: Vec<_> = scores.iter().collect();
    sorted.sort_by(|a, b| a.score.total_cmp(&b.score));
    sorted
}

pub fn rank(scores: &CategoryScores) -> CategoryInsights {
    CategoryInsights {
        strongest: descending(scores)
            .into_iter()
            .take(RANKING_WINDOW)
            .map(RankedCategory::from)
            .collect(),
        weakest: ascending(scores)
            .into_iter()
            .take(RANKING_WINDOW)
            .map(RankedCategory::from)
            .collect(),
    }
}

pub fn strengths(scores: &CategoryScores, narratives: &NarrativeCatalog) -> Vec<Strength> {
    descending(scores)
        .into_iter()
        .take(RANKING_WINDOW)
        .filter(|score| score.score >= STRENGTH_FLOOR)
        .map(|score| {
            let narrative = narratives.strength(score.id);
            Strength {
                id: score.id,
                name: score.name,
                score: score.score,
                interpretation: narrative.interpretation.clone(),
                impact: narrative.impact.clone(),
            }
        })
        .collect()
}

pub fn constraints(scores: &CategoryScores, narratives: &NarrativeCatalog) -> Vec<Constraint> {
    ascending(scores)
        .into_iter()
        .take(RANKING_WINDOW)
        .filter(|score| score.score < CONSTRAINT_CEILING)
        .map(|score| {
            let narrative = narratives.constraint(score.id);
            Constraint {
                id: score.id,
                name: score.name,
                score: score.score,
                severity: ConstraintSeverity::for_score(score.score),
                interpretation: narrative.interpretation.clone(),
                impact: narrative.impact.clone(),
                cost: narrative.cost.clone(),
            }
        })
        .collect()
}

pub fn inconsistent(scores: &CategoryScores) -> Vec<InconsistentCategory> {
    scores
        .iter()
        .filter(|score| score.is_inconsistent)
        .map(|score| InconsistentCategory {
            id: score.id,
            name: score.name,
            score: score.score,
            variance: score.variance,
        })
        .collect()
}

/// First matching template wins. Averages divide by the full window, so short lists pull
/// the average down. Early exploration needs at least one constraint: an empty list would
/// average to 0 and would otherwise label an all-high profile as early exploration.
pub fn overall_pattern(
    scores: &CategoryScores,
    strengths: &[Strength],
    constraints: &[Constraint],
) -> OverallPattern {
    let window = RANKING_WINDOW as f64;
    let average_strength = strengths.iter().map(|s| s.score).sum::<f64>() / window;
    let average_constraint = constraints.iter().map(|c| c.score).sum::<f64>() / window;

    let template = if scores.score_of(SKILLS_LEARNING) > 3.5
        && scores.score_of(STRATEGY_CULTURE) < 2.8
    {
        PatternTemplate::FragileProgress
    } else if scores.score_of(TOOLS_AUTOMATION) > 3.5 && scores.score_of(DATA_INFRASTRUCTURE) < 2.8
    {
        PatternTemplate::TechnicalDebtRisk
    } else if !constraints.is_empty() && average_constraint < 2.5 {
        PatternTemplate::EarlyExploration
    } else if average_strength > 3.8 {
        PatternTemplate::StrongFoundation
    } else {
        PatternTemplate::SystematicProgress
    };

    template.into()
}
