//! Decision engine for autonomous agent runs.
//!
//! Given a natural-language task, the engine classifies its complexity,
//! works out which capabilities (and therefore which servers) it needs, and
//! names the workflow pattern best suited to run it:
//!
//! ```
//! use autopilot_decision::{AutonomousDecisionEngine, WorkflowPattern};
//!
//! let engine = AutonomousDecisionEngine::new();
//! let (analysis, recommendation) =
//!     engine.analyze_and_recommend("List the files in the current directory", &[]);
//! assert_eq!(recommendation.pattern, WorkflowPattern::Direct);
//! println!("{}", engine.explain_decision(&analysis, &recommendation));
//! ```
//!
//! Everything here is synchronous and free of I/O, except the explicit
//! configuration and catalog loaders.

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod keywords;
pub mod selector;
pub mod types;

#[cfg(test)]
mod tests;

pub use analyzer::TaskAnalyzer;
pub use catalog::{CatalogError, ServerCatalog, categorized_tool};
pub use config::{BaseTimes, ConfigError, DecisionConfig, DecisionConfigLoader};
pub use engine::{AutonomousDecisionEngine, explain_decision};
pub use keywords::categorize_tool;
pub use selector::{Criterion, PATTERN_CRITERIA, PatternCriteria, StrategySelector, best_score};
pub use types::{
    Capability, DEFAULT_CONFIDENCE, ParseTagError, PatternScore, StrategyRecommendation, TaskAnalysis,
    TaskComplexity, WorkflowPattern, clamp_confidence,
};

pub use autopilot_abstraction::{ServerProfile, ServerSource, SourceError, ToolCapability};
