use super::aggregate::CategoryScores;
use crate::assessment::catalog::{
    DATA_INFRASTRUCTURE, EXPERIMENTATION_INNOVATION, IMPACT_MEASUREMENT, INTEGRATION_SCALING,
    PRODUCT_PROCESSES, SKILLS_LEARNING, STRATEGY_CULTURE, TOOLS_AUTOMATION,
};
use serde::Serialize;

pub const ALIGNMENT_INPUTS: [&str; 2] = [STRATEGY_CULTURE, SKILLS_LEARNING];
pub const ENGINEERING_DEPTH_INPUTS: [&str; 3] =
    [DATA_INFRASTRUCTURE, INTEGRATION_SCALING, IMPACT_MEASUREMENT];
pub const WORKFLOW_ACCELERATION_INPUTS: [&str; 2] = [TOOLS_AUTOMATION, INTEGRATION_SCALING];
pub const EXPERIMENTATION_INPUTS: [&str; 2] = [EXPERIMENTATION_INNOVATION, PRODUCT_PROCESSES];

/// Cross-category composites consumed by the recommendation cascade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Signals {
    pub alignment: f64,
    pub engineering_depth: f64,
    pub workflow_acceleration: f64,
    pub experimentation: f64,
}

impl Signals {
    pub fn from_scores(scores: &CategoryScores) -> Self {
        Self {
            alignment: composite(scores, &ALIGNMENT_INPUTS),
            engineering_depth: composite(scores, &ENGINEERING_DEPTH_INPUTS),
            workflow_acceleration: composite(scores, &WORKFLOW_ACCELERATION_INPUTS),
            experimentation: composite(scores, &EXPERIMENTATION_INPUTS),
        }
    }
}

fn composite(scores: &CategoryScores, inputs: &[&str]) -> f64 {
    inputs.iter().map(|id| scores.score_of(id)).sum::<f64>() / inputs.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::answers::{AnswerTable, InputPolicy};
    use crate::assessment::catalog::{AssessmentCatalog, SECURITY_COMPLIANCE};
    use crate::assessment::scoring::aggregate::aggregate;

    #[test]
    fn signals_average_their_input_categories() {
        let catalog = AssessmentCatalog::standard();
        let table = AnswerTable::from_rows([
            (STRATEGY_CULTURE, [2, 2, 2, 2, 2]),
            (DATA_INFRASTRUCTURE, [3, 3, 3, 3, 3]),
            (TOOLS_AUTOMATION, [5, 5, 5, 5, 5]),
            (SKILLS_LEARNING, [4, 4, 4, 4, 4]),
            (PRODUCT_PROCESSES, [1, 1, 1, 1, 1]),
            (SECURITY_COMPLIANCE, [3, 3, 3, 3, 3]),
            (EXPERIMENTATION_INNOVATION, [5, 5, 5, 5, 5]),
            (INTEGRATION_SCALING, [4, 4, 4, 4, 4]),
            (IMPACT_MEASUREMENT, [2, 2, 2, 2, 2]),
        ])
        .expect("valid rows");
        let resolved = table
            .resolve(&catalog, InputPolicy::Strict)
            .expect("complete table");
        let signals = Signals::from_scores(&aggregate(&catalog, &resolved));

        assert_eq!(signals.alignment, 3.0);
        assert_eq!(signals.engineering_depth, 3.0);
        assert_eq!(signals.workflow_acceleration, 4.5);
        assert_eq!(signals.experimentation, 3.0);
    }

    #[test]
    fn missing_categories_contribute_zero() {
        let catalog = AssessmentCatalog::standard();
        let table =
            AnswerTable::from_rows([(STRATEGY_CULTURE, [4, 4, 4, 4, 4])]).expect("valid rows");
        let resolved = table
            .resolve(&catalog, InputPolicy::Lenient)
            .expect("lenient");
        let signals = Signals::from_scores(&aggregate(&catalog, &resolved));

        assert_eq!(signals.alignment, 2.0);
        assert_eq!(signals.engineering_depth, 0.0);
    }

    #[test]
    fn serializes_with_field_names() {
        let signals = Signals {
            alignment: 1.0,
            engineering_depth: 2.0,
            workflow_acceleration: 3.0,
            experimentation: 4.0,
        };
        let json = serde_json::to_value(signals).expect("serializes");
        assert_eq!(json["engineering_depth"], 2.0);
        assert_eq!(json["workflow_acceleration"], 3.0);
    }
}
