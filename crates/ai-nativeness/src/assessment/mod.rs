//! AI Nativeness self-assessment: the question catalog, answer handling, the scoring engine
//! and the submission workflow built around it.

pub mod answers;
pub mod catalog;
pub mod content;
pub mod import;
pub mod narrative;
pub mod scoring;
pub mod submissions;
pub mod survey;

pub use answers::{AnswerError, AnswerTable, CategoryAnswers, InputPolicy, LikertAnswer};
pub use catalog::{AssessmentCatalog, Category, LikertOption, LIKERT_SCALE, QUESTIONS_PER_CATEGORY};
pub use content::{ContentLibrary, ProductContent};
pub use import::{AnswerImportError, AnswerImporter};
pub use narrative::{DocumentLoadError, NarrativeCatalog};
pub use scoring::{AssessmentResult, ScoringEngine};
pub use survey::{SurveyError, SurveySession};
