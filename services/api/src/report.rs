use crate::infra::{build_content, build_engine};
use ai_nativeness::assessment::scoring::AssessmentResult;
use ai_nativeness::assessment::{AnswerImporter, ContentLibrary, InputPolicy, LIKERT_SCALE};
use ai_nativeness::config::AppConfig;
use ai_nativeness::error::AppError;
use clap::{Args, ValueEnum};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PolicyArg {
    Strict,
    Lenient,
}

impl From<PolicyArg> for InputPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Strict => InputPolicy::Strict,
            PolicyArg::Lenient => InputPolicy::Lenient,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Answers file: CSV rows of `category,question,value` or a JSON answer table
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Override the configured input policy
    #[arg(long, value_enum)]
    pub(crate) policy: Option<PolicyArg>,
    /// Print the scored assessment as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        policy,
        json,
    } = args;

    let config = AppConfig::load()?;
    let engine = build_engine(&config.assessment, policy.map(InputPolicy::from))?;
    let content = build_content(&config.assessment)?;

    let table = AnswerImporter::from_path(engine.catalog(), &answers)?;
    let result = engine.score(&table)?;

    if json {
        let payload = serde_json::json!({
            "result": &result,
            "level_description": content.level_description(result.maturity_level.label()),
            "product": content.product(result.recommendation.product.name()),
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("Assessment payload unavailable: {err}"),
        }
    } else {
        print!("{}", render_report(&result, &content));
    }

    Ok(())
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = build_engine(&config.assessment, None)?;
    let catalog = engine.catalog();

    println!("AI Nativeness assessment (catalog {})", catalog.version());
    for (position, category) in catalog.categories().iter().enumerate() {
        println!("\n{}. {} [{}]", position + 1, category.name, category.id);
        println!("   {}", category.description);
        for (number, question) in category.questions.iter().enumerate() {
            println!("   Q{}: {}", number + 1, question);
        }
    }

    println!("\nAnswer scale");
    for option in LIKERT_SCALE {
        println!("  {} = {}", option.value, option.description);
    }

    Ok(())
}

pub(crate) fn render_report(result: &AssessmentResult, content: &ContentLibrary) -> String {
    let mut out = String::new();
    let level = result.maturity_level.label();
    let segment = result.diffusion_segment.segment;

    let _ = writeln!(out, "AI Nativeness assessment");
    let _ = writeln!(
        out,
        "Index {:.2} / 5 | {}% | {}",
        result.ai_nativeness_index, result.ai_nativeness_percentage, level
    );
    if let Some(description) = content.level_description(level) {
        let _ = writeln!(out, "{description}");
    }

    let _ = writeln!(
        out,
        "\nBenchmark: {} ({}, {}th percentile)",
        segment.label(),
        result.diffusion_segment.market_position,
        result.diffusion_segment.percentile
    );
    let _ = writeln!(out, "{}", segment.benchmark_meaning());

    let _ = writeln!(out, "\nProfile: {}", result.overall_pattern.title);
    let _ = writeln!(out, "{}", result.overall_pattern.description);

    let _ = writeln!(out, "\nCategory scores");
    for score in result.category_scores.iter() {
        let flag = if score.is_inconsistent {
            " (answers vary widely)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  - {}: {:.1} [{}]{}",
            score.name,
            score.score,
            score.band().label(),
            flag
        );
    }

    if result.strengths.is_empty() {
        let _ = writeln!(out, "\nStrengths: none above the threshold yet");
    } else {
        let _ = writeln!(out, "\nStrengths");
        for strength in &result.strengths {
            let _ = writeln!(
                out,
                "  - {} ({:.1}): {}. {}",
                strength.name, strength.score, strength.interpretation, strength.impact
            );
        }
    }

    if result.constraints.is_empty() {
        let _ = writeln!(out, "\nConstraints: none");
    } else {
        let _ = writeln!(out, "\nConstraints");
        for constraint in &result.constraints {
            let _ = writeln!(
                out,
                "  - {} ({:.1}, {}): {}. {} {}",
                constraint.name,
                constraint.score,
                constraint.severity.label(),
                constraint.interpretation,
                constraint.impact,
                constraint.cost
            );
        }
    }

    if !result.patterns.is_empty() {
        let _ = writeln!(out, "\nRisk patterns");
        for pattern in &result.patterns {
            let _ = writeln!(
                out,
                "  - [{}] {}: {}",
                pattern.risk.label(),
                pattern.title,
                pattern.description
            );
        }
    }

    let product = result.recommendation.product.name();
    let _ = writeln!(
        out,
        "\nRecommended next step: {} ({})",
        product,
        result.recommendation.reason.code()
    );
    if let Some(details) = content.product(product) {
        let _ = writeln!(out, "  {}", details.description);
        let _ = writeln!(out, "  Why: {}", details.why);
        let _ = writeln!(out, "  What changes: {}", details.change);
    }

    out
}
