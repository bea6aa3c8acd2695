use super::aggregate::CategoryScores;
use crate::assessment::catalog::{
    DATA_INFRASTRUCTURE, EXPERIMENTATION_INNOVATION, IMPACT_MEASUREMENT, INTEGRATION_SCALING,
    SECURITY_COMPLIANCE, SKILLS_LEARNING, STRATEGY_CULTURE, TOOLS_AUTOMATION,
};
use serde::Serialize;

/// A category above this mean counts as a strength for pattern purposes.
pub const PATTERN_HIGH_THRESHOLD: f64 = 3.5;
/// A category below this mean counts as lagging.
pub const PATTERN_LOW_THRESHOLD: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    HighToolsLowData,
    HighSkillsLowStrategy,
    HighExperimentLowMeasure,
    HighIntegrationLowSecurity,
}

impl PatternKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::HighToolsLowData => "high-tools-low-data",
            Self::HighSkillsLowStrategy => "high-skills-low-strategy",
            Self::HighExperimentLowMeasure => "high-experiment-low-measure",
            Self::HighIntegrationLowSecurity => "high-integration-low-security",
        }
    }
}

/// A cross-category imbalance: one area running ahead of the area that should support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskPattern {
    #[serde(rename = "type")]
    pub kind: PatternKind,
    pub title: &'static str,
    pub description: &'static str,
    pub risk: RiskLevel,
    pub strong_category: &'static str,
    pub weak_category: &'static str,
}

const PATTERN_RULES: [RiskPattern; 4] = [
    RiskPattern {
        kind: PatternKind::HighToolsLowData,
        title: "Tools without foundation",
        description: "AI is used actively, but without a reliable data foundation. This creates risk of unstable results and technical debt.",
        risk: RiskLevel::High,
        strong_category: TOOLS_AUTOMATION,
        weak_category: DATA_INFRASTRUCTURE,
    },
    RiskPattern {
        kind: PatternKind::HighSkillsLowStrategy,
        title: "Skills without alignment",
        description: "Individual competence exists, but without clear strategic direction. Efforts may fragment.",
        risk: RiskLevel::Medium,
        strong_category: SKILLS_LEARNING,
        weak_category: STRATEGY_CULTURE,
    },
    RiskPattern {
        kind: PatternKind::HighExperimentLowMeasure,
        title: "Experiments without validation",
        description: "Active experimentation without clear measurement. Hard to know what works and scale successes.",
        risk: RiskLevel::Medium,
        strong_category: EXPERIMENTATION_INNOVATION,
        weak_category: IMPACT_MEASUREMENT,
    },
    RiskPattern {
        kind: PatternKind::HighIntegrationLowSecurity,
        title: "Scaling without governance",
        description: "AI solutions are being scaled, but security and compliance practices lag behind.",
        risk: RiskLevel::High,
        strong_category: INTEGRATION_SCALING,
        weak_category: SECURITY_COMPLIANCE,
    },
];

/// Every rule is checked independently; matches keep rule order.
pub fn detect(scores: &CategoryScores) -> Vec<RiskPattern> {
    PATTERN_RULES
        .iter()
        .filter(|rule| {
            scores.score_of(rule.strong_category) > PATTERN_HIGH_THRESHOLD
                && scores.score_of(rule.weak_category) < PATTERN_LOW_THRESHOLD
        })
        .copied()
        .collect()
}
