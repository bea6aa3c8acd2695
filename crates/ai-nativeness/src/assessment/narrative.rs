//! Per-category wording used by the insight ranker.
//!
//! The wording lives in data so that locales or tone can change without touching the
//! ranking logic. `NarrativeCatalog::standard()` carries the built-in English text and a JSON
//! document with the same shape can replace it at start-up.

use super::catalog::{
    DATA_INFRASTRUCTURE, EXPERIMENTATION_INNOVATION, IMPACT_MEASUREMENT, INTEGRATION_SCALING,
    PRODUCT_PROCESSES, SECURITY_COMPLIANCE, SKILLS_LEARNING, STRATEGY_CULTURE, TOOLS_AUTOMATION,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthNarrative {
    pub interpretation: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintNarrative {
    pub interpretation: String,
    pub impact: String,
    pub cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNarrative {
    pub strength: StrengthNarrative,
    pub constraint: ConstraintNarrative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeCatalog {
    /// Used for category ids without a dedicated entry.
    pub fallback: CategoryNarrative,
    #[serde(default)]
    pub categories: HashMap<String, CategoryNarrative>,
}

impl NarrativeCatalog {
    pub fn standard() -> Self {
        let categories = [
            (
                STRATEGY_CULTURE,
                entry(
                    "Your team has clear direction and leadership support for AI initiatives",
                    "This creates momentum and clear priorities",
                    "Experiments don't scale; teams move in different directions",
                    "Individual teams are experimenting, but there's no shared direction",
                    "Duplicated effort, inconsistent quality, slow decisions",
                ),
            ),
            (
                DATA_INFRASTRUCTURE,
                entry(
                    "You have reliable data foundation that AI can depend on",
                    "This enables reliable AI solutions",
                    "AI works in demos but breaks in production",
                    "AI solutions are fragile and hard to maintain",
                    "Re-work, fragile systems, limited trust in AI",
                ),
            ),
            (
                TOOLS_AUTOMATION,
                entry(
                    "Your team actively uses AI in daily work and workflows",
                    "This builds practical experience and confidence",
                    "Limited practical experience with AI tools",
                    "Team works manually where AI could help",
                    "Lower productivity, manual work, slower delivery",
                ),
            ),
            (
                SKILLS_LEARNING,
                entry(
                    "Team members are developing AI skills and knowledge",
                    "This creates capacity and capability",
                    "Knowledge gaps limit what the team can accomplish",
                    "Dependency on a few individuals; uneven capabilities",
                    "Can't tackle complex problems, dependent on vendors",
                ),
            ),
            (
                PRODUCT_PROCESSES,
                entry(
                    "AI is being integrated into your products and processes",
                    "This delivers real business value",
                    "AI remains separate from core work",
                    "Missing opportunities to improve products with AI",
                    "Competitive disadvantage, missed revenue opportunities",
                ),
            ),
            (
                SECURITY_COMPLIANCE,
                entry(
                    "You're thinking about AI risks and governance early",
                    "This prevents costly problems later",
                    "AI usage creates unmanaged risks",
                    "Risk of incidents, compliance issues, or data leaks",
                    "Potential incidents, regulatory penalties, reputation damage",
                ),
            ),
            (
                EXPERIMENTATION_INNOVATION,
                entry(
                    "Your team actively tries new AI approaches and learns from them",
                    "This drives learning and innovation",
                    "Limited learning from AI experiments",
                    "Team doesn't learn fast enough from AI experiments",
                    "Slow progress, repeat mistakes, wasted effort",
                ),
            ),
            (
                INTEGRATION_SCALING,
                entry(
                    "You're successfully scaling AI solutions beyond prototypes",
                    "This multiplies AI benefits across the organization",
                    "AI solutions stay isolated and small-scale",
                    "AI value stays limited; hard to scale successes",
                    "Limited ROI, AI stays in pilot purgatory",
                ),
            ),
            (
                IMPACT_MEASUREMENT,
                entry(
                    "You track and measure the impact of AI initiatives",
                    "This enables data-driven decisions and proves value",
                    "Hard to know what's working; difficult to justify investment",
                    "Can't prioritize; hard to get stakeholder buy-in",
                    "Can't defend budget, hard to improve, unclear priorities",
                ),
            ),
        ]
        .into_iter()
        .map(|(id, narrative)| (id.to_string(), narrative))
        .collect();

        Self {
            fallback: entry(
                "This area is working well",
                "This creates positive outcomes",
                "This area needs attention",
                "This limits your AI progress",
                "This creates hidden costs",
            ),
            categories,
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DocumentLoadError> {
        let file = std::fs::File::open(path)?;
        Ok(Self::from_reader(std::io::BufReader::new(file))?)
    }

    pub fn for_category(&self, category_id: &str) -> &CategoryNarrative {
        self.categories.get(category_id).unwrap_or(&self.fallback)
    }

    pub fn strength(&self, category_id: &str) -> &StrengthNarrative {
        &self.for_category(category_id).strength
    }

    pub fn constraint(&self, category_id: &str) -> &ConstraintNarrative {
        &self.for_category(category_id).constraint
    }
}

impl Default for NarrativeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn entry(
    strength_interpretation: &str,
    strength_impact: &str,
    constraint_interpretation: &str,
    constraint_impact: &str,
    constraint_cost: &str,
) -> CategoryNarrative {
    CategoryNarrative {
        strength: StrengthNarrative {
            interpretation: strength_interpretation.to_string(),
            impact: strength_impact.to_string(),
        },
        constraint: ConstraintNarrative {
            interpretation: constraint_interpretation.to_string(),
            impact: constraint_impact.to_string(),
            cost: constraint_cost.to_string(),
        },
    }
}

/// Failure to read a narrative or content document from disk.
#[derive(Debug, thiserror::Error)]
pub enum DocumentLoadError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
}
