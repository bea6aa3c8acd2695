use serde::Serialize;

/// Number of Likert statements per category. Progress and variance math depend on it.
pub const QUESTIONS_PER_CATEGORY: usize = 5;

pub const STRATEGY_CULTURE: &str = "strategy-culture";
pub const DATA_INFRASTRUCTURE: &str = "data-infrastructure";
pub const TOOLS_AUTOMATION: &str = "tools-automation";
pub const SKILLS_LEARNING: &str = "skills-learning";
pub const PRODUCT_PROCESSES: &str = "product-processes";
pub const SECURITY_COMPLIANCE: &str = "security-compliance";
pub const EXPERIMENTATION_INNOVATION: &str = "experimentation-innovation";
pub const INTEGRATION_SCALING: &str = "integration-scaling";
pub const IMPACT_MEASUREMENT: &str = "impact-measurement";

/// A topical grouping of statements answered on the Likert scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub questions: [&'static str; QUESTIONS_PER_CATEGORY],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikertOption {
    pub value: u8,
    pub label: &'static str,
    pub description: &'static str,
}

pub const LIKERT_SCALE: [LikertOption; 5] = [
    LikertOption {
        value: 1,
        label: "1",
        description: "Strongly disagree",
    },
    LikertOption {
        value: 2,
        label: "2",
        description: "Disagree",
    },
    LikertOption {
        value: 3,
        label: "3",
        description: "Neutral",
    },
    LikertOption {
        value: 4,
        label: "4",
        description: "Agree",
    },
    LikertOption {
        value: 5,
        label: "5",
        description: "Strongly agree",
    },
];

/// Versioned, ordered set of categories. Declaration order is the tie-break order for ranking.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentCatalog {
    version: &'static str,
    categories: Vec<Category>,
}

impl AssessmentCatalog {
    pub fn new(version: &'static str, categories: Vec<Category>) -> Self {
        Self {
            version,
            categories,
        }
    }

    pub fn standard() -> Self {
        Self::new("2025.2", standard_categories())
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|category| category.id == id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_questions(&self) -> usize {
        self.categories.len() * QUESTIONS_PER_CATEGORY
    }
}

impl Default for AssessmentCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_categories() -> Vec<Category> {
    vec![
        Category {
            id: STRATEGY_CULTURE,
            name: "Strategy & Culture",
            description: "How intentionally AI is positioned, communicated, and supported for the team.",
            questions: [
                "Leadership regularly communicates to my team why AI matters for the business and for specific roles over the next 12 months.",
                "Leadership and managers have discussed and aligned with the team on which roles AI supports and which roles may change because of AI.",
                "Employees in my team generally feel safe using AI in their daily work without fear of judgment or negative consequences.",
                "Leadership has communicated where and how AI is expected to be used in everyday work, and my team refers to this guidance in practice.",
                "Failed or imperfect AI experiments in the team are usually discussed with a focus on learning rather than blame.",
            ],
        },
        Category {
            id: DATA_INFRASTRUCTURE,
            name: "Data, Infrastructure & Governance",
            description: "How well data, systems, and rules enable the team to use AI responsibly.",
            questions: [
                "My team works with clearly identified data sources that are used in our AI use cases.",
                "The data used by the team for AI is generally clean, up to date, and usable without excessive manual effort.",
                "There are clear rules about which data must not be shared with AI tools, and my team mostly follows them in practice.",
                "AI tools used by the team are connected to data sources through integrations or APIs in most cases, rather than manual copy-paste.",
                "Known infrastructure limitations are explicitly considered when my team decides how and where to use AI.",
            ],
        },
        Category {
            id: TOOLS_AUTOMATION,
            name: "Tools & Automation",
            description: "How consistently AI tools are embedded into the team's daily workflows.",
            questions: [
                "AI tools are used regularly as part of my team's daily work, not only for one-off experiments.",
                "Team members actively review AI outputs and know when human judgment is required.",
                "My team consciously chooses between AI assistants and more autonomous agents depending on task complexity and risk.",
                "There are recurring tasks where AI saves the team noticeable time on a regular basis.",
                "The team periodically reassesses its AI tool stack and adjusts it as needs and constraints change.",
            ],
        },
        Category {
            id: SKILLS_LEARNING,
            name: "Skills & Learning",
            description: "How systematically AI skills are developed and supported within the team.",
            questions: [
                "Required AI skills are defined for different roles in my team, at least at a high level.",
                "Some team members consistently create clear and effective instructions or prompts for AI tools.",
                "New team members are introduced to existing AI practices during onboarding, even if only at a basic level.",
                "AI outputs produced by the team are usually reviewed and validated rather than accepted without checks.",
                "The team has a shared understanding of which AI-related skills are currently missing or underdeveloped.",
            ],
        },
        Category {
            id: PRODUCT_PROCESSES,
            name: "Product & Processes",
            description: "How AI contributes to value creation in the team's work.",
            questions: [
                "My team can point to specific parts of the product or service where AI creates tangible value.",
                "AI improves not only speed, but also quality or user experience in some of the team's core processes.",
                "Processes that require a human-in-the-loop are defined and generally followed by the team.",
                "Changes to workflows caused by AI adoption are documented or explained well enough for the team to follow.",
                "When using AI, the team consciously balances speed, quality, and reliability rather than optimizing for speed alone.",
            ],
        },
        Category {
            id: SECURITY_COMPLIANCE,
            name: "Security & Compliance",
            description: "How risks, responsibility, and safeguards are handled in the team's usage.",
            questions: [
                "Team members are generally aware of risks related to uncontrolled or careless AI usage.",
                "Rules for safe and compliant AI use exist and are applied by the team in most everyday situations.",
                "Responsibility for decisions and mistakes involving AI is clearly assigned to people, not to tools.",
                "The team's AI usage aligns with client expectations, legal requirements, and regulatory constraints.",
                "There is a known process the team can follow to pause, limit, or roll back AI solutions if issues arise.",
            ],
        },
        Category {
            id: EXPERIMENTATION_INNOVATION,
            name: "Experimentation & Innovation",
            description: "How structured and intentional AI experimentation is within the team.",
            questions: [
                "AI experiments run by the team are usually framed as hypotheses with a clear expected outcome.",
                "Most AI experiments have a defined timeframe and some criteria for success or failure.",
                "Failed AI experiments are reviewed by the team and lead to concrete learnings.",
                "The team has some protected time or space to experiment with AI alongside delivery work.",
                "The team consciously decides which AI experiments to scale further and which to stop.",
            ],
        },
        Category {
            id: INTEGRATION_SCALING,
            name: "Integration & Scaling",
            description: "How reliably the team's AI solutions can be sustained and expanded.",
            questions: [
                "AI solutions used by the team do not depend on a single individual to operate or evolve.",
                "Successful AI solutions from the team can be reused or adapted by other teams with reasonable effort.",
                "AI solutions are maintained by the team after launch, not only during initial rollout.",
                "The team has a reasonable understanding of what currently limits further AI scaling.",
                "AI initiatives fit into the broader system and architecture the team works within, rather than existing as isolated add-ons.",
            ],
        },
        Category {
            id: IMPACT_MEASUREMENT,
            name: "Impact Measurement",
            description: "How clearly the team measures and prioritizes AI impact.",
            questions: [
                "Success metrics are defined for AI initiatives before or shortly after the team starts them.",
                "The team can point to concrete improvements that are largely attributable to AI usage.",
                "The team distinguishes between local efficiency gains and broader business impact.",
                "AI initiatives involving the team are prioritized and resourced alongside other projects based on expected value.",
                "Leadership is willing to stop AI initiatives involving the team if they do not deliver meaningful results over time.",
            ],
        },
    ]
}
