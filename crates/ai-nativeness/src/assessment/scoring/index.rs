use super::aggregate::CategoryScores;
use serde::Serialize;

/// Unweighted mean of every category mean.
pub fn overall_index(scores: &CategoryScores) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(|score| score.score).sum::<f64>() / scores.len() as f64
}

/// Rescale an index on [1, 5] to a whole percentage on [0, 100].
pub fn index_to_percentage(index: f64) -> u8 {
    (((index - 1.0) / 4.0) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MaturityLevel {
    #[serde(rename = "AI-Curious")]
    AiCurious,
    #[serde(rename = "AI-Enabled")]
    AiEnabled,
    #[serde(rename = "AI-Driven")]
    AiDriven,
    #[serde(rename = "AI-Native")]
    AiNative,
}

impl MaturityLevel {
    pub const fn ordered() -> [Self; 4] {
        [Self::AiCurious, Self::AiEnabled, Self::AiDriven, Self::AiNative]
    }

    /// Closed upper bounds: 2.0 is Curious, 3.0 is Enabled, 4.0 is Driven.
    pub fn from_index(index: f64) -> Self {
        if (1.0..=2.0).contains(&index) {
            Self::AiCurious
        } else if index > 2.0 && index <= 3.0 {
            Self::AiEnabled
        } else if index > 3.0 && index <= 4.0 {
            Self::AiDriven
        } else if index > 4.0 && index <= 5.0 {
            Self::AiNative
        } else {
            Self::AiCurious
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AiCurious => "AI-Curious",
            Self::AiEnabled => "AI-Enabled",
            Self::AiDriven => "AI-Driven",
            Self::AiNative => "AI-Native",
        }
    }
}

/// Position on the technology adoption curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiffusionSegment {
    Laggards,
    #[serde(rename = "Late Majority")]
    LateMajority,
    #[serde(rename = "Early Majority")]
    EarlyMajority,
    #[serde(rename = "Early Adopters")]
    EarlyAdopters,
    Innovators,
}

impl DiffusionSegment {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0..=14 => Self::Laggards,
            15..=34 => Self::LateMajority,
            35..=64 => Self::EarlyMajority,
            65..=84 => Self::EarlyAdopters,
            _ => Self::Innovators,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Laggards => "Laggards",
            Self::LateMajority => "Late Majority",
            Self::EarlyMajority => "Early Majority",
            Self::EarlyAdopters => "Early Adopters",
            Self::Innovators => "Innovators",
        }
    }

    pub const fn percentile(self) -> u8 {
        match self {
            Self::Laggards => 85,
            Self::LateMajority => 65,
            Self::EarlyMajority => 50,
            Self::EarlyAdopters => 20,
            Self::Innovators => 5,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Laggards => "Just beginning to explore AI possibilities",
            Self::LateMajority => "Adopting AI cautiously, following proven patterns",
            Self::EarlyMajority => "Systematically building AI capabilities",
            Self::EarlyAdopters => "Leading AI adoption in your industry",
            Self::Innovators => "Pioneering new AI practices and approaches",
        }
    }

    pub const fn market_position(self) -> &'static str {
        match self {
            Self::Laggards => "bottom 15%",
            Self::LateMajority => "bottom 35%",
            Self::EarlyMajority => "middle 50%",
            Self::EarlyAdopters => "top 25%",
            Self::Innovators => "top 10%",
        }
    }

    /// Reading of the segment for a report, relative to other software teams.
    pub const fn benchmark_meaning(self) -> &'static str {
        match self {
            Self::Laggards => "You're at the beginning of your AI journey. Focus on building awareness and foundational skills.",
            Self::LateMajority => "You're building AI capabilities carefully. The opportunity is to move from isolated experiments to systematic practices.",
            Self::EarlyMajority => "You're ahead of half of software teams. You've moved past early experimentation into structured adoption.",
            Self::EarlyAdopters => "You're in the top 25% of teams. You're leading AI adoption in your industry with systematic practices.",
            Self::Innovators => "You're in the top 10% of teams. You're pioneering new AI practices and setting standards for others.",
        }
    }

    pub fn placement(self) -> DiffusionPlacement {
        DiffusionPlacement {
            segment: self,
            percentile: self.percentile(),
            description: self.description(),
            market_position: self.market_position(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffusionPlacement {
    pub segment: DiffusionSegment,
    pub percentile: u8,
    pub description: &'static str,
    pub market_position: &'static str,
}
