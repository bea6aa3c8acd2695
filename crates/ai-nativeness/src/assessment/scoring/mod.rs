mod aggregate;
mod index;
mod insights;
mod patterns;
mod recommendation;
mod signals;

pub use aggregate::{
    CategoryInterpretation, CategoryScore, CategoryScores, ScoreBand, INCONSISTENCY_THRESHOLD,
};
pub use index::{
    index_to_percentage, overall_index, DiffusionPlacement, DiffusionSegment, MaturityLevel,
};
pub use insights::{
    CategoryInsights, Constraint, ConstraintSeverity, InconsistentCategory, OverallPattern,
    PatternTemplate, RankedCategory, Strength,
};
pub use patterns::{PatternKind, RiskLevel, RiskPattern};
pub use recommendation::{Product, ReasonCode, Recommendation};
pub use signals::Signals;

use super::answers::{AnswerError, AnswerTable, InputPolicy};
use super::catalog::AssessmentCatalog;
use super::narrative::NarrativeCatalog;
use serde::Serialize;

/// Stateless scorer that turns a complete answer table into an [`AssessmentResult`].
///
/// The engine owns its catalog and narrative text and never mutates them, so one instance
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: AssessmentCatalog,
    narratives: NarrativeCatalog,
    policy: InputPolicy,
}

impl ScoringEngine {
    pub fn new(catalog: AssessmentCatalog, narratives: NarrativeCatalog) -> Self {
        Self {
            catalog,
            narratives,
            policy: InputPolicy::default(),
        }
    }

    pub fn standard() -> Self {
        Self::new(AssessmentCatalog::standard(), NarrativeCatalog::standard())
    }

    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn catalog(&self) -> &AssessmentCatalog {
        &self.catalog
    }

    pub fn narratives(&self) -> &NarrativeCatalog {
        &self.narratives
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn score(&self, answers: &AnswerTable) -> Result<AssessmentResult, AnswerError> {
        let resolved = answers.resolve(&self.catalog, self.policy)?;
        let category_scores = aggregate::aggregate(&self.catalog, &resolved);

        let index = overall_index(&category_scores);
        let percentage = index_to_percentage(index);
        let signals = Signals::from_scores(&category_scores);

        let strengths = insights::strengths(&category_scores, &self.narratives);
        let constraints = insights::constraints(&category_scores, &self.narratives);
        let overall_pattern = insights::overall_pattern(&category_scores, &strengths, &constraints);

        Ok(AssessmentResult {
            ai_nativeness_index: index,
            ai_nativeness_percentage: percentage,
            maturity_level: MaturityLevel::from_index(index),
            recommendation: recommendation::recommend(&signals, index),
            insights: insights::rank(&category_scores),
            patterns: patterns::detect(&category_scores),
            inconsistent_categories: insights::inconsistent(&category_scores),
            diffusion_segment: DiffusionSegment::from_percentage(percentage).placement(),
            signals,
            strengths,
            constraints,
            overall_pattern,
            category_scores,
        })
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Everything derived from one answer table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub ai_nativeness_index: f64,
    pub ai_nativeness_percentage: u8,
    pub maturity_level: MaturityLevel,
    pub category_scores: CategoryScores,
    pub recommendation: Recommendation,
    pub insights: CategoryInsights,
    pub signals: Signals,
    pub patterns: Vec<RiskPattern>,
    pub inconsistent_categories: Vec<InconsistentCategory>,
    pub diffusion_segment: DiffusionPlacement,
    pub strengths: Vec<Strength>,
    pub constraints: Vec<Constraint>,
    pub overall_pattern: OverallPattern,
}
