use super::narrative::DocumentLoadError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Long-form copy for a recommended product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductContent {
    pub name: String,
    pub description: String,
    pub why: String,
    pub change: String,
}

/// Narrative text keyed by maturity level label and product name.
///
/// The scoring engine hands out keys only; missing entries are the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLibrary {
    #[serde(default)]
    pub levels: HashMap<String, String>,
    #[serde(default)]
    pub products: HashMap<String, ProductContent>,
}

impl ContentLibrary {
    pub fn standard() -> Self {
        let levels = [
            (
                "AI-Curious",
                "Your team is clearly interested in AI and already exploring its potential, but most initiatives are still informal and driven by individual enthusiasm. This is a healthy starting point: curiosity means there is energy and openness to change. At the same time, the lack of shared language, clear priorities, and agreed rules creates a risk that efforts will stay fragmented and hard to scale. The main opportunity at this stage is to align the team around what AI means for your work, where it should be used, and what \"good\" looks like before moving deeper into technical implementation.",
            ),
            (
                "AI-Enabled",
                "Your team has moved beyond curiosity and already applies AI in real tasks and pilots. Some practices work well, and there are visible wins. However, AI usage is still uneven: different people and sub-teams use it in different ways, and results depend heavily on individual skills. This stage is about turning isolated successes into repeatable practices. With clearer standards, shared tooling approaches, and explicit expectations, your team can reduce friction and prepare for more ambitious AI initiatives.",
            ),
            (
                "AI-Driven",
                "AI is already part of how your team operates and delivers results. You are not just experimenting; you are integrating AI into products, processes, or workflows and seeing measurable impact. The key challenge at this level is reliability and scale: making sure solutions are robust, maintainable, and understandable by the whole team. Strengthening engineering discipline, evaluation, and ownership will help ensure that AI remains a long-term advantage rather than a source of hidden complexity.",
            ),
            (
                "AI-Native",
                "AI is deeply embedded in your team's strategy, culture, and technical systems. Decisions about tools, processes, and architecture naturally include AI considerations, and the team treats AI as a core capability rather than an add-on. At this level, the focus shifts from adoption to leadership: refining platforms, sharing best practices, and continuously improving how AI is governed and evolved. Your main opportunity is to stay intentional and disciplined as you scale, ensuring that maturity does not turn into complacency.",
            ),
        ]
        .into_iter()
        .map(|(level, text)| (level.to_string(), text.to_string()))
        .collect();

        let products = [
            ProductContent {
                name: "AI foundations training".to_string(),
                description: "Your assessment results suggest that the main challenge right now is alignment rather than technology. Your team is curious about AI and already experimenting, but there is no shared language yet around what AI is, where it should be used, and what good usage looks like. This is a very common and healthy stage.".to_string(),
                why: "AI foundations training gives your cross-functional team a common mental model of LLMs, agents, and AI workflows. Instead of relying on individual intuition, the team learns to reason about AI in the same way and make decisions together.".to_string(),
                change: "After the program, discussions about AI become clearer, experiments feel safer, and your team can move forward without internal friction or uncertainty about basic concepts.".to_string(),
            },
            ProductContent {
                name: "AI engineering training".to_string(),
                description: "Your team is already actively working with AI and exploring product-level use cases. The ambition is there, but the results show gaps in engineering depth: data readiness, evaluation, deployment, and long-term maintenance. This usually means that prototypes appear quickly, but scaling them becomes stressful and unpredictable.".to_string(),
                why: "AI engineering training focuses on the full lifecycle of AI-based products. It helps your engineers move from experiments to production-ready systems with clear ownership, testing, monitoring, and metrics.".to_string(),
                change: "Within a few months, your team will be able to build AI-powered solutions that are not only impressive demos, but stable, debuggable, and ready to support real users and business processes.".to_string(),
            },
            ProductContent {
                name: "AI-driven software development workshops".to_string(),
                description: "Your results indicate a mature engineering team that already understands AI fundamentals. The main opportunity now is to integrate AI more deeply into everyday development workflows: coding, reviews, maintenance, and quality control.".to_string(),
                why: "The workshops are short, focused, and hands-on. They work directly with your team's real code and processes, showing how coding agents, pull-request workflows, and AI-assisted maintenance can speed up delivery without sacrificing quality.".to_string(),
                change: "You should see immediate productivity gains and more consistent use of AI across the team, without the overhead of a long training program or a full reset of existing practices.".to_string(),
            },
        ]
        .into_iter()
        .map(|product| (product.name.clone(), product))
        .collect();

        Self { levels, products }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DocumentLoadError> {
        let file = std::fs::File::open(path)?;
        Ok(Self::from_reader(std::io::BufReader::new(file))?)
    }

    pub fn level_description(&self, level: &str) -> Option<&str> {
        self.levels.get(level).map(String::as_str)
    }

    pub fn product(&self, name: &str) -> Option<&ProductContent> {
        self.products.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::scoring::{MaturityLevel, Product};

    #[test]
    fn standard_library_has_entries_for_every_engine_key() {
        let content = ContentLibrary::standard();
        for level in MaturityLevel::ordered() {
            assert!(content.level_description(level.label()).is_some());
        }
        for product in Product::ordered() {
            let entry = content.product(product.name()).expect("product content");
            assert_eq!(entry.name, product.name());
        }
    }

    #[test]
    fn missing_keys_are_reported_as_none() {
        let content = ContentLibrary::from_reader(r#"{"levels":{}}"#.as_bytes())
            .expect("partial document parses");
        assert!(content.level_description("AI-Native").is_none());
        assert!(content.product("AI foundations training").is_none());
    }
}
