//! The decision engine façade: analysis, selection and explanation.

use crate::analyzer::TaskAnalyzer;
use crate::config::DecisionConfig;
use crate::selector::StrategySelector;
use crate::types::{PatternScore, StrategyRecommendation, TaskAnalysis};
use autopilot_abstraction::{ServerProfile, ServerSource, SourceError};
use tracing::info;

/// Composes [`TaskAnalyzer`] and [`StrategySelector`].
///
/// Stateless apart from configuration, so a single engine can be shared
/// across threads (e.g. behind an `Arc`) and called concurrently.
#[derive(Debug, Clone, Default)]
pub struct AutonomousDecisionEngine {
    analyzer: TaskAnalyzer,
    selector: StrategySelector,
}

impl AutonomousDecisionEngine {
    /// Creates an engine with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine from a decision configuration.
    #[must_use]
    pub fn with_config(config: &DecisionConfig) -> Self {
        Self { analyzer: TaskAnalyzer::with_config(config), selector: StrategySelector::with_config(config) }
    }

    /// The analyzer this engine uses.
    pub fn analyzer(&self) -> &TaskAnalyzer {
        &self.analyzer
    }

    /// The selector this engine uses.
    pub fn selector(&self) -> &StrategySelector {
        &self.selector
    }

    /// Analyzes `task_description` and recommends a strategy for it.
    pub fn analyze_and_recommend(
        &self,
        task_description: &str,
        available_servers: &[ServerProfile],
    ) -> (TaskAnalysis, StrategyRecommendation) {
        let analysis = self.analyzer.analyze_task(task_description);
        let recommendation = self.selector.select_strategy(&analysis, available_servers);

        info!(
            pattern = %recommendation.pattern,
            complexity = %analysis.complexity(),
            servers = recommendation.required_servers.len(),
            confidence = recommendation.confidence,
            "Selected execution strategy"
        );

        (analysis, recommendation)
    }

    /// Like [`analyze_and_recommend`](Self::analyze_and_recommend), reading
    /// the server snapshot from `source`.
    ///
    /// # Errors
    /// Returns the source's error unchanged if the snapshot cannot be read.
    pub fn analyze_and_recommend_from<S>(
        &self,
        task_description: &str,
        source: &S,
    ) -> Result<(TaskAnalysis, StrategyRecommendation), SourceError>
    where
        S: ServerSource + ?Sized,
    {
        let servers = source.server_profiles()?;
        Ok(self.analyze_and_recommend(task_description, &servers))
    }

    /// Scores every pattern for `task_description`, in tie-break order.
    pub fn rank_patterns(&self, task_description: &str) -> Vec<PatternScore> {
        let analysis = self.analyzer.analyze_task(task_description);
        self.selector.score_patterns(&analysis)
    }

    /// Formats both values as a human-readable report.
    pub fn explain_decision(
        &self,
        analysis: &TaskAnalysis,
        recommendation: &StrategyRecommendation,
    ) -> String {
        explain_decision(analysis, recommendation)
    }
}

/// Formats an analysis and its recommendation as a multi-section report.
pub fn explain_decision(analysis: &TaskAnalysis, recommendation: &StrategyRecommendation) -> String {
    let capabilities = if analysis.required_capabilities().is_empty() {
        "none".to_string()
    } else {
        analysis.required_capabilities().iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ")
    };
    let servers = if recommendation.required_servers.is_empty() {
        "none".to_string()
    } else {
        recommendation.required_servers.join(", ")
    };
    let fallbacks = if recommendation.fallback_patterns.is_empty() {
        "none".to_string()
    } else {
        recommendation.fallback_patterns.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", ")
    };

    let lines = [
        "Task Analysis".to_string(),
        format!("  Complexity: {}", analysis.complexity()),
        format!("  Required capabilities: {}", capabilities),
        format!("  Estimated steps: {}", analysis.estimated_steps()),
        format!("  Parallelizable: {}", yes_no(analysis.parallelizable())),
        format!("  Requires iteration: {}", yes_no(analysis.requires_iteration())),
        format!("  Requires human input: {}", yes_no(analysis.requires_human_input())),
        format!("  Analysis confidence: {:.0}%", analysis.confidence() * 100.0),
        String::new(),
        "Strategy Recommendation".to_string(),
        format!("  Pattern: {}", recommendation.pattern),
        format!("  Reasoning: {}", recommendation.reasoning),
        format!("  Required servers: {}", servers),
        format!("  Estimated execution time: {:.0}s", recommendation.estimated_execution_time),
        format!("  Recommendation confidence: {:.0}%", recommendation.confidence * 100.0),
        format!("  Fallback patterns: {}", fallbacks),
    ];

    lines.join("\n")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
