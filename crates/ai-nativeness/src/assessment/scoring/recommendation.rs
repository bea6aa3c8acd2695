use super::signals::Signals;
use serde::Serialize;

pub const ALIGNMENT_THRESHOLD: f64 = 3.2;
pub const EXPERIMENTATION_THRESHOLD: f64 = 3.2;
pub const ENGINEERING_GAP_THRESHOLD: f64 = 3.4;
pub const WORKFLOW_THRESHOLD: f64 = 3.4;
pub const ENGINEERING_READY_THRESHOLD: f64 = 3.2;
pub const EARLY_STAGE_INDEX: f64 = 2.5;
pub const INTERMEDIATE_STAGE_INDEX: f64 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Product {
    #[serde(rename = "AI foundations training")]
    FoundationsTraining,
    #[serde(rename = "AI engineering training")]
    EngineeringTraining,
    #[serde(rename = "AI-driven software development workshops")]
    DevelopmentWorkshops,
}

impl Product {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::FoundationsTraining,
            Self::EngineeringTraining,
            Self::DevelopmentWorkshops,
        ]
    }

    /// Key into the content library.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FoundationsTraining => "AI foundations training",
            Self::EngineeringTraining => "AI engineering training",
            Self::DevelopmentWorkshops => "AI-driven software development workshops",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonCode {
    AlignmentGap,
    EngineeringDepthGap,
    WorkflowOptimization,
    EarlyStage,
    IntermediateStage,
    AdvancedStage,
}

impl ReasonCode {
    pub const fn code(self) -> &'static str {
        match self {
            Self::AlignmentGap => "alignment-gap",
            Self::EngineeringDepthGap => "engineering-depth-gap",
            Self::WorkflowOptimization => "workflow-optimization",
            Self::EarlyStage => "early-stage",
            Self::IntermediateStage => "intermediate-stage",
            Self::AdvancedStage => "advanced-stage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub product: Product,
    pub reason: ReasonCode,
}

struct SignalRule {
    applies: fn(&Signals) -> bool,
    product: Product,
    reason: ReasonCode,
}

/// Evaluated top to bottom; the first matching rule wins.
const SIGNAL_RULES: [SignalRule; 3] = [
    SignalRule {
        applies: alignment_gap,
        product: Product::FoundationsTraining,
        reason: ReasonCode::AlignmentGap,
    },
    SignalRule {
        applies: engineering_depth_gap,
        product: Product::EngineeringTraining,
        reason: ReasonCode::EngineeringDepthGap,
    },
    SignalRule {
        applies: workflow_ready,
        product: Product::DevelopmentWorkshops,
        reason: ReasonCode::WorkflowOptimization,
    },
];

fn alignment_gap(signals: &Signals) -> bool {
    signals.alignment < ALIGNMENT_THRESHOLD
}

fn engineering_depth_gap(signals: &Signals) -> bool {
    signals.alignment >= ALIGNMENT_THRESHOLD
        && signals.experimentation >= EXPERIMENTATION_THRESHOLD
        && signals.engineering_depth < ENGINEERING_GAP_THRESHOLD
}

fn workflow_ready(signals: &Signals) -> bool {
    signals.alignment >= ALIGNMENT_THRESHOLD
        && signals.workflow_acceleration >= WORKFLOW_THRESHOLD
        && signals.engineering_depth >= ENGINEERING_READY_THRESHOLD
}

pub fn recommend(signals: &Signals, index: f64) -> Recommendation {
    if let Some(rule) = SIGNAL_RULES.iter().find(|rule| (rule.applies)(signals)) {
        return Recommendation {
            product: rule.product,
            reason: rule.reason,
        };
    }

    let (product, reason) = if index < EARLY_STAGE_INDEX {
        (Product::FoundationsTraining, ReasonCode::EarlyStage)
    } else if index < INTERMEDIATE_STAGE_INDEX {
        (Product::EngineeringTraining, ReasonCode::IntermediateStage)
    } else {
        (Product::DevelopmentWorkshops, ReasonCode::AdvancedStage)
    };

    Recommendation { product, reason }
}
