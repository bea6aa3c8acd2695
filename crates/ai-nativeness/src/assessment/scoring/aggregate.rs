use super::super::catalog::{AssessmentCatalog, QUESTIONS_PER_CATEGORY};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Population variance above which a category is flagged as inconsistent.
pub const INCONSISTENCY_THRESHOLD: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub id: &'static str,
    pub name: &'static str,
    pub score: f64,
    pub variance: f64,
    pub is_inconsistent: bool,
}

impl CategoryScore {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }

    pub fn interpretation(&self) -> CategoryInterpretation {
        CategoryInterpretation::for_score(self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        if score <= 2.0 {
            Self::Low
        } else if score <= 3.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInterpretation {
    pub level: ScoreBand,
    pub text: &'static str,
}

impl CategoryInterpretation {
    pub fn for_score(score: f64) -> Self {
        let (level, text) = if (1.0..=2.0).contains(&score) {
            (
                ScoreBand::Low,
                "Critical gap. The area is largely unaddressed.",
            )
        } else if score > 2.0 && score <= 3.0 {
            (
                ScoreBand::Medium,
                "Early stage. Awareness exists, but practices are inconsistent.",
            )
        } else if score > 3.0 && score <= 4.0 {
            (
                ScoreBand::High,
                "Operational. Practices are used, but not yet fully mature.",
            )
        } else if score > 4.0 && score <= 5.0 {
            (
                ScoreBand::High,
                "Mature. The area is embedded in team processes.",
            )
        } else {
            (ScoreBand::Low, "Area needs attention.")
        };

        Self { level, text }
    }
}

/// Category scores in catalog order. Serializes as an ordered `id -> score` map.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScores(Vec<CategoryScore>);

impl CategoryScores {
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryScore> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[CategoryScore] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, category_id: &str) -> Option<&CategoryScore> {
        self.0.iter().find(|score| score.id == category_id)
    }

    /// Mean for `category_id`, or 0 when the id is unknown.
    pub fn score_of(&self, category_id: &str) -> f64 {
        self.get(category_id).map(|score| score.score).unwrap_or(0.0)
    }
}

impl Serialize for CategoryScores {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for score in &self.0 {
            map.serialize_entry(score.id, score)?;
        }
        map.end()
    }
}

pub(crate) fn aggregate(
    catalog: &AssessmentCatalog,
    resolved: &[Option<[f64; QUESTIONS_PER_CATEGORY]>],
) -> CategoryScores {
    let scores = catalog
        .categories()
        .iter()
        .zip(resolved)
        .map(|(category, values)| {
            let (score, variance) = match values {
                Some(values) => {
                    let average = mean(values);
                    (average, variance(values, average))
                }
                None => (0.0, 0.0),
            };

            CategoryScore {
                id: category.id,
                name: category.name,
                score,
                variance,
                is_inconsistent: variance > INCONSISTENCY_THRESHOLD,
            }
        })
        .collect();

    CategoryScores(scores)
}

fn mean(values: &[f64; QUESTIONS_PER_CATEGORY]) -> f64 {
    values.iter().sum::<f64>() / QUESTIONS_PER_CATEGORY as f64
}

fn variance(values: &[f64; QUESTIONS_PER_CATEGORY], mean: f64) -> f64 {
    values
        .iter()
        .map(|value| {
            let deviation = value - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / QUESTIONS_PER_CATEGORY as f64
}
