//! Types for the decision engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a tag string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseTagError {
    /// What was being parsed ("pattern", "capability").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Ordinal classification of task difficulty.
///
/// The discriminants are significant: step estimates and execution-time
/// multipliers are derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TaskComplexity {
    /// Single obvious action.
    Simple = 1,
    /// A few related actions.
    Moderate = 2,
    /// Research, design or integration work.
    Complex = 3,
    /// Multi-stage automation or system-wide work.
    Advanced = 4,
    /// Large-scale or mission-critical work.
    Expert = 5,
}

impl TaskComplexity {
    /// All levels in ascending order.
    pub const ALL: [TaskComplexity; 5] = [
        TaskComplexity::Simple,
        TaskComplexity::Moderate,
        TaskComplexity::Complex,
        TaskComplexity::Advanced,
        TaskComplexity::Expert,
    ];

    /// Numeric level, 1 through 5.
    #[must_use]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Converts a numeric level back into a complexity, if in range.
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }

    /// Returns the next level up, staying at `Expert` once reached.
    #[must_use]
    pub fn escalate(self) -> Self {
        Self::from_value(self.value() + 1).unwrap_or(TaskComplexity::Expert)
    }

    /// Base number of steps for a task at this level (`2 * level - 1`).
    #[must_use]
    pub fn base_steps(self) -> u32 {
        2 * u32::from(self.value()) - 1
    }
}

impl fmt::Display for TaskComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskComplexity::Simple => write!(f, "SIMPLE"),
            TaskComplexity::Moderate => write!(f, "MODERATE"),
            TaskComplexity::Complex => write!(f, "COMPLEX"),
            TaskComplexity::Advanced => write!(f, "ADVANCED"),
            TaskComplexity::Expert => write!(f, "EXPERT"),
        }
    }
}

/// Named strategy for orchestrating one or more agents.
///
/// The engine only names patterns; executing them is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPattern {
    /// One agent handles the task directly.
    Direct,
    /// Independent subtasks fan out to agents concurrently.
    Parallel,
    /// The task is routed to the most suitable specialist agent.
    Router,
    /// Agents hand work to each other dynamically.
    Swarm,
    /// A planner decomposes the task and coordinates workers.
    Orchestrator,
    /// A generator and an evaluator iterate until quality is reached.
    EvaluatorOptimizer,
}

impl WorkflowPattern {
    /// All patterns in declaration order. This is also the default tie-break
    /// priority.
    pub const ALL: [WorkflowPattern; 6] = [
        WorkflowPattern::Direct,
        WorkflowPattern::Parallel,
        WorkflowPattern::Router,
        WorkflowPattern::Swarm,
        WorkflowPattern::Orchestrator,
        WorkflowPattern::EvaluatorOptimizer,
    ];

    /// The pattern's tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowPattern::Direct => "direct",
            WorkflowPattern::Parallel => "parallel",
            WorkflowPattern::Router => "router",
            WorkflowPattern::Swarm => "swarm",
            WorkflowPattern::Orchestrator => "orchestrator",
            WorkflowPattern::EvaluatorOptimizer => "evaluator_optimizer",
        }
    }
}

impl fmt::Display for WorkflowPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowPattern {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| ParseTagError { kind: "pattern", value: s.to_string() })
    }
}

/// Known capability categories a task can require.
///
/// Server profiles advertise the same tags in `ToolCapability::category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Reading, writing and organizing files.
    FileManagement,
    /// Looking things up on the web.
    WebSearch,
    /// Driving a browser.
    WebAutomation,
    /// Running code or scripts.
    CodeExecution,
    /// Crunching data.
    DataAnalysis,
    /// Producing prose.
    ContentCreation,
    /// Sending messages.
    Communication,
    /// Querying or updating databases.
    Database,
    /// Working with git hosting.
    VersionControl,
    /// Working with images.
    ImageProcessing,
}

impl Capability {
    /// All categories in declaration order.
    pub const ALL: [Capability; 10] = [
        Capability::FileManagement,
        Capability::WebSearch,
        Capability::WebAutomation,
        Capability::CodeExecution,
        Capability::DataAnalysis,
        Capability::ContentCreation,
        Capability::Communication,
        Capability::Database,
        Capability::VersionControl,
        Capability::ImageProcessing,
    ];

    /// The category tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::FileManagement => "file_management",
            Capability::WebSearch => "web_search",
            Capability::WebAutomation => "web_automation",
            Capability::CodeExecution => "code_execution",
            Capability::DataAnalysis => "data_analysis",
            Capability::ContentCreation => "content_creation",
            Capability::Communication => "communication",
            Capability::Database => "database",
            Capability::VersionControl => "version_control",
            Capability::ImageProcessing => "image_processing",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ParseTagError { kind: "capability", value: s.to_string() })
    }
}

/// Confidence used when no usable value is available.
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Clamps a confidence to [0, 1]. NaN maps to 0.
pub fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Structured result of analyzing a task description.
///
/// Immutable once built: fields are read through getters, and the builder
/// methods keep `estimated_steps >= 1` and `confidence` within [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskAnalysis {
    description: String,
    complexity: TaskComplexity,
    required_capabilities: BTreeSet<Capability>,
    estimated_steps: u32,
    parallelizable: bool,
    requires_iteration: bool,
    requires_human_input: bool,
    confidence: f64,
}

impl TaskAnalysis {
    /// Creates a minimal analysis: one step, no capabilities, sequential,
    /// default confidence.
    pub fn new(description: impl Into<String>, complexity: TaskComplexity) -> Self {
        Self {
            description: description.into(),
            complexity,
            required_capabilities: BTreeSet::new(),
            estimated_steps: 1,
            parallelizable: false,
            requires_iteration: false,
            requires_human_input: false,
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    /// Adds required capabilities.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        self.required_capabilities.extend(capabilities);
        self
    }

    /// Sets the step estimate; 0 is raised to 1.
    #[must_use]
    pub fn with_estimated_steps(mut self, steps: u32) -> Self {
        self.estimated_steps = steps.max(1);
        self
    }

    #[must_use]
    pub fn with_parallelizable(mut self, parallelizable: bool) -> Self {
        self.parallelizable = parallelizable;
        self
    }

    #[must_use]
    pub fn with_iteration(mut self, requires_iteration: bool) -> Self {
        self.requires_iteration = requires_iteration;
        self
    }

    #[must_use]
    pub fn with_human_input(mut self, requires_human_input: bool) -> Self {
        self.requires_human_input = requires_human_input;
        self
    }

    /// Sets the confidence, clamped to [0, 1].
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = clamp_confidence(confidence);
        self
    }

    /// The raw task description.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn complexity(&self) -> TaskComplexity {
        self.complexity
    }

    /// Capability categories the task needs.
    pub fn required_capabilities(&self) -> &BTreeSet<Capability> {
        &self.required_capabilities
    }

    /// Estimated number of steps, always at least 1.
    pub fn estimated_steps(&self) -> u32 {
        self.estimated_steps
    }

    /// Whether subtasks can run independently.
    pub fn parallelizable(&self) -> bool {
        self.parallelizable
    }

    /// Whether the output needs iterative refinement.
    pub fn requires_iteration(&self) -> bool {
        self.requires_iteration
    }

    /// Whether a human needs to approve or confirm something.
    pub fn requires_human_input(&self) -> bool {
        self.requires_human_input
    }

    /// Trust in this analysis, in [0, 1].
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Number of distinct required capabilities.
    pub fn capability_count(&self) -> usize {
        self.required_capabilities.len()
    }
}

/// The selected execution strategy for an analyzed task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRecommendation {
    /// Selected pattern.
    pub pattern: WorkflowPattern,
    /// Human-readable justification.
    pub reasoning: String,
    /// Servers that provide at least one required capability.
    pub required_servers: Vec<String>,
    /// Estimated execution time in seconds.
    pub estimated_execution_time: f64,
    /// Trust in this recommendation (0-1).
    pub confidence: f64,
    /// Alternatives, best first. Never contains `pattern`.
    pub fallback_patterns: Vec<WorkflowPattern>,
}

/// Score of a single pattern against an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternScore {
    /// The scored pattern.
    pub pattern: WorkflowPattern,
    /// Fraction of weighted criteria matched (0-1).
    pub score: f64,
}
