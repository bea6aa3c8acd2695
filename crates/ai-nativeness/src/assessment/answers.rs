use super::catalog::{AssessmentCatalog, QUESTIONS_PER_CATEGORY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// A single response on the 1–5 agreement scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LikertAnswer(u8);

impl LikertAnswer {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, AnswerError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AnswerError::OutOfRange(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for LikertAnswer {
    type Error = AnswerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LikertAnswer> for u8 {
    fn from(value: LikertAnswer) -> Self {
        value.0
    }
}

/// Ordered answers for one category; `None` marks an unanswered statement.
pub type CategoryAnswers = [Option<LikertAnswer>; QUESTIONS_PER_CATEGORY];

/// How the engine treats incomplete answer tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Reject missing categories, unanswered statements and unknown category ids.
    #[default]
    Strict,
    /// Zero-fill gaps and ignore unknown ids.
    Lenient,
}

impl InputPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "lenient" | "zero-fill" | "zero_fill" => Some(Self::Lenient),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

/// Answers keyed by category id, as handed over by the navigation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerTable(BTreeMap<String, CategoryAnswers>);

impl AnswerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty answer rows for every category in the catalog.
    pub fn blank(catalog: &AssessmentCatalog) -> Self {
        let rows = catalog
            .categories()
            .iter()
            .map(|category| (category.id.to_string(), [None; QUESTIONS_PER_CATEGORY]))
            .collect();
        Self(rows)
    }

    /// Every statement of every category answered with the same value.
    pub fn uniform(catalog: &AssessmentCatalog, answer: LikertAnswer) -> Self {
        let rows = catalog
            .categories()
            .iter()
            .map(|category| {
                (
                    category.id.to_string(),
                    [Some(answer); QUESTIONS_PER_CATEGORY],
                )
            })
            .collect();
        Self(rows)
    }

    /// Build a table from fully answered rows of raw values.
    pub fn from_rows<'a, I>(rows: I) -> Result<Self, AnswerError>
    where
        I: IntoIterator<Item = (&'a str, [u8; QUESTIONS_PER_CATEGORY])>,
    {
        let mut table = Self::new();
        for (category_id, values) in rows {
            let mut answers = [None; QUESTIONS_PER_CATEGORY];
            for (slot, value) in answers.iter_mut().zip(values) {
                *slot = Some(LikertAnswer::new(value)?);
            }
            table.insert(category_id, answers);
        }
        Ok(table)
    }

    pub fn insert(
        &mut self,
        category_id: impl Into<String>,
        answers: CategoryAnswers,
    ) -> Option<CategoryAnswers> {
        self.0.insert(category_id.into(), answers)
    }

    pub fn get(&self, category_id: &str) -> Option<&CategoryAnswers> {
        self.0.get(category_id)
    }

    pub(crate) fn get_mut(&mut self, category_id: &str) -> Option<&mut CategoryAnswers> {
        self.0.get_mut(category_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryAnswers)> {
        self.0.iter().map(|(id, answers)| (id.as_str(), answers))
    }

    pub fn answered_count(&self) -> usize {
        self.0
            .values()
            .map(|answers| answers.iter().filter(|answer| answer.is_some()).count())
            .sum()
    }

    pub fn is_complete(&self, catalog: &AssessmentCatalog) -> bool {
        catalog.categories().iter().all(|category| {
            self.get(category.id)
                .map(|answers| answers.iter().all(Option::is_some))
                .unwrap_or(false)
        })
    }

    /// Numeric answers per catalog category, in catalog order, after applying `policy`.
    ///
    /// `None` marks a category with no answers at all, which only lenient input produces.
    pub(crate) fn resolve(
        &self,
        catalog: &AssessmentCatalog,
        policy: InputPolicy,
    ) -> Result<Vec<Option<[f64; QUESTIONS_PER_CATEGORY]>>, AnswerError> {
        for category_id in self.0.keys() {
            if catalog.category(category_id).is_none() {
                match policy {
                    InputPolicy::Strict => {
                        return Err(AnswerError::UnknownCategory(category_id.clone()))
                    }
                    InputPolicy::Lenient => {
                        warn!(category = %category_id, "ignoring answers for unknown category");
                    }
                }
            }
        }

        catalog
            .categories()
            .iter()
            .map(|category| {
                let Some(answers) = self.get(category.id) else {
                    return match policy {
                        InputPolicy::Strict => {
                            Err(AnswerError::MissingCategory(category.id.to_string()))
                        }
                        InputPolicy::Lenient => Ok(None),
                    };
                };

                let mut values = [0.0; QUESTIONS_PER_CATEGORY];
                for (index, (slot, answer)) in values.iter_mut().zip(answers).enumerate() {
                    match (answer, policy) {
                        (Some(answer), _) => *slot = f64::from(answer.value()),
                        (None, InputPolicy::Lenient) => *slot = 0.0,
                        (None, InputPolicy::Strict) => {
                            return Err(AnswerError::Unanswered {
                                category: category.id.to_string(),
                                question: index + 1,
                            })
                        }
                    }
                }
                Ok(Some(values))
            })
            .collect()
    }
}

/// Validation failures raised while turning an answer table into scores.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("answer {0} is outside the Likert scale 1-5")]
    OutOfRange(u8),
    #[error("category '{0}' is not part of the assessment catalog")]
    UnknownCategory(String),
    #[error("category '{0}' has no answers")]
    MissingCategory(String),
    #[error("question {question} in category '{category}' is unanswered")]
    Unanswered { category: String, question: usize },
}
