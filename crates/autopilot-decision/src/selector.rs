//! Workflow pattern selection.
//!
//! Each pattern is scored against a [`TaskAnalysis`] with a fixed table of
//! weighted criteria. Adding a pattern means adding a row to
//! [`PATTERN_CRITERIA`]; the scoring loop does not change.

use crate::config::{BaseTimes, DecisionConfig};
use crate::types::{
    PatternScore, StrategyRecommendation, TaskAnalysis, TaskComplexity, WorkflowPattern,
    clamp_confidence,
};
use autopilot_abstraction::ServerProfile;
use std::fmt;
use tracing::{debug, warn};

/// A single weighted scoring rule.
#[derive(Clone, Copy)]
pub struct Criterion {
    /// Short label, used in debug logs.
    pub name: &'static str,
    /// Partial score contributed when the predicate holds.
    pub weight: f64,
    /// Whether the analysis satisfies this criterion.
    pub predicate: fn(&TaskAnalysis) -> bool,
}

impl fmt::Debug for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criterion").field("name", &self.name).field("weight", &self.weight).finish()
    }
}

/// The criteria scoring one pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternCriteria {
    pub pattern: WorkflowPattern,
    pub criteria: &'static [Criterion],
}

fn low_complexity(a: &TaskAnalysis) -> bool {
    a.complexity() <= TaskComplexity::Moderate
}

fn at_least_moderate(a: &TaskAnalysis) -> bool {
    a.complexity() >= TaskComplexity::Moderate
}

fn at_least_complex(a: &TaskAnalysis) -> bool {
    a.complexity() >= TaskComplexity::Complex
}

fn at_least_advanced(a: &TaskAnalysis) -> bool {
    a.complexity() >= TaskComplexity::Advanced
}

fn few_steps(a: &TaskAnalysis) -> bool {
    a.estimated_steps() <= 3
}

fn some_steps(a: &TaskAnalysis) -> bool {
    a.estimated_steps() >= 3
}

fn bounded_steps(a: &TaskAnalysis) -> bool {
    a.estimated_steps() <= 5
}

fn many_steps(a: &TaskAnalysis) -> bool {
    a.estimated_steps() >= 5
}

fn parallelizable(a: &TaskAnalysis) -> bool {
    a.parallelizable()
}

fn sequential(a: &TaskAnalysis) -> bool {
    !a.parallelizable()
}

fn single_capability(a: &TaskAnalysis) -> bool {
    a.capability_count() <= 1
}

fn any_capability(a: &TaskAnalysis) -> bool {
    a.capability_count() >= 1
}

fn multiple_capabilities(a: &TaskAnalysis) -> bool {
    a.capability_count() >= 2
}

fn focused_capabilities(a: &TaskAnalysis) -> bool {
    a.capability_count() <= 2
}

fn broad_capabilities(a: &TaskAnalysis) -> bool {
    a.capability_count() >= 3
}

fn iterative(a: &TaskAnalysis) -> bool {
    a.requires_iteration()
}

fn single_pass(a: &TaskAnalysis) -> bool {
    !a.requires_iteration()
}

fn needs_human(a: &TaskAnalysis) -> bool {
    a.requires_human_input()
}

/// Scoring table, one row per pattern.
pub const PATTERN_CRITERIA: &[PatternCriteria] = &[
    PatternCriteria {
        pattern: WorkflowPattern::Direct,
        criteria: &[
            Criterion { name: "low_complexity", weight: 1.0, predicate: low_complexity },
            Criterion { name: "few_steps", weight: 0.9, predicate: few_steps },
            Criterion { name: "sequential", weight: 0.6, predicate: sequential },
            Criterion { name: "single_capability", weight: 0.8, predicate: single_capability },
        ],
    },
    PatternCriteria {
        pattern: WorkflowPattern::Parallel,
        criteria: &[
            Criterion { name: "parallelizable", weight: 1.0, predicate: parallelizable },
            Criterion { name: "multiple_capabilities", weight: 0.8, predicate: multiple_capabilities },
            Criterion { name: "at_least_moderate", weight: 0.5, predicate: at_least_moderate },
            Criterion { name: "single_pass", weight: 0.5, predicate: single_pass },
            Criterion { name: "independent_subtasks", weight: 0.6, predicate: some_steps },
        ],
    },
    PatternCriteria {
        pattern: WorkflowPattern::Router,
        criteria: &[
            Criterion { name: "any_capability", weight: 0.7, predicate: any_capability },
            Criterion { name: "low_complexity", weight: 0.6, predicate: low_complexity },
            Criterion { name: "bounded_steps", weight: 0.6, predicate: bounded_steps },
            Criterion { name: "sequential", weight: 0.5, predicate: sequential },
        ],
    },
    PatternCriteria {
        pattern: WorkflowPattern::Swarm,
        criteria: &[
            Criterion { name: "at_least_advanced", weight: 0.9, predicate: at_least_advanced },
            Criterion { name: "broad_capabilities", weight: 0.8, predicate: broad_capabilities },
            Criterion { name: "needs_human", weight: 0.7, predicate: needs_human },
            Criterion { name: "parallelizable", weight: 0.5, predicate: parallelizable },
        ],
    },
    PatternCriteria {
        pattern: WorkflowPattern::Orchestrator,
        criteria: &[
            Criterion { name: "many_steps", weight: 1.0, predicate: many_steps },
            Criterion { name: "needs_planning", weight: 0.9, predicate: at_least_complex },
            Criterion { name: "multiple_capabilities", weight: 0.7, predicate: multiple_capabilities },
            Criterion { name: "has_dependencies", weight: 0.6, predicate: sequential },
        ],
    },
    PatternCriteria {
        pattern: WorkflowPattern::EvaluatorOptimizer,
        criteria: &[
            Criterion { name: "iterative", weight: 1.0, predicate: iterative },
            Criterion { name: "at_least_moderate", weight: 0.6, predicate: at_least_moderate },
            Criterion { name: "focused_capabilities", weight: 0.5, predicate: focused_capabilities },
        ],
    },
];

/// Criteria for `pattern`, or an empty slice if the table has no row for it.
pub fn criteria_for(pattern: WorkflowPattern) -> &'static [Criterion] {
    PATTERN_CRITERIA.iter().find(|row| row.pattern == pattern).map(|row| row.criteria).unwrap_or(&[])
}

/// Fraction of weighted criteria matched, clamped to [0, 1].
///
/// Each criterion adds 1 to the denominator and its weight to the numerator
/// when satisfied. No criteria means a score of 0.
pub fn score_criteria(criteria: &[Criterion], analysis: &TaskAnalysis) -> f64 {
    if criteria.is_empty() {
        return 0.0;
    }
    let matched: f64 = criteria.iter().filter(|c| (c.predicate)(analysis)).map(|c| c.weight).sum();
    (matched / criteria.len() as f64).clamp(0.0, 1.0)
}

/// Chooses a workflow pattern for an analyzed task.
#[derive(Debug, Clone)]
pub struct StrategySelector {
    /// Every pattern exactly once, highest tie-break priority first.
    priority: Vec<WorkflowPattern>,
    fallback_threshold: f64,
    max_fallbacks: usize,
    base_times: BaseTimes,
}

impl StrategySelector {
    /// Creates a selector with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&DecisionConfig::default())
    }

    /// Creates a selector using the selection settings from `config`.
    ///
    /// Patterns missing from `config.pattern_priority` are appended in
    /// declaration order and duplicates are dropped, so every pattern is
    /// always scored.
    #[must_use]
    pub fn with_config(config: &DecisionConfig) -> Self {
        let mut priority: Vec<WorkflowPattern> = Vec::with_capacity(WorkflowPattern::ALL.len());
        for pattern in config.pattern_priority.iter().copied().chain(WorkflowPattern::ALL) {
            if !priority.contains(&pattern) {
                priority.push(pattern);
            }
        }

        Self {
            priority,
            fallback_threshold: config.fallback_threshold,
            max_fallbacks: config.max_fallbacks,
            base_times: config.base_times.clone(),
        }
    }

    /// Scores every pattern, in tie-break priority order.
    pub fn score_patterns(&self, analysis: &TaskAnalysis) -> Vec<PatternScore> {
        self.priority
            .iter()
            .map(|&pattern| {
                let score = score_criteria(criteria_for(pattern), analysis);
                debug!(pattern = %pattern, score, "Scored pattern");
                PatternScore { pattern, score }
            })
            .collect()
    }

    /// Selects the best pattern and builds the recommendation.
    ///
    /// Never fails. Server availability only affects `required_servers`,
    /// not the pattern scores.
    pub fn select_strategy(
        &self,
        analysis: &TaskAnalysis,
        available_servers: &[ServerProfile],
    ) -> StrategyRecommendation {
        let scores = self.score_patterns(analysis);

        let best = best_score(&scores);
        let fallback_patterns = self.fallback_patterns(&scores, best.pattern);
        let required_servers = resolve_servers(analysis, available_servers);
        let estimated_execution_time = self.estimate_time(best.pattern, analysis);
        let confidence = clamp_confidence(best.score * analysis.confidence());

        StrategyRecommendation {
            pattern: best.pattern,
            reasoning: build_reasoning(best.pattern, analysis),
            required_servers,
            estimated_execution_time,
            confidence,
            fallback_patterns,
        }
    }

    /// Estimated seconds: base time × complexity level × max(1, steps / 2).
    pub fn estimate_time(&self, pattern: WorkflowPattern, analysis: &TaskAnalysis) -> f64 {
        let base = self.base_times.get(pattern);
        let complexity_multiplier = f64::from(analysis.complexity().value());
        let step_multiplier = (f64::from(analysis.estimated_steps()) / 2.0).max(1.0);
        base * complexity_multiplier * step_multiplier
    }

    /// Up to `max_fallbacks` other patterns scoring above the threshold,
    /// best first.
    pub(crate) fn fallback_patterns(
        &self,
        scores: &[PatternScore],
        selected: WorkflowPattern,
    ) -> Vec<WorkflowPattern> {
        let mut others: Vec<PatternScore> =
            scores.iter().filter(|s| s.pattern != selected).copied().collect();
        // Stable sort: equal scores keep priority order.
        others.sort_by(|a, b| b.score.total_cmp(&a.score));
        others
            .into_iter()
            .filter(|s| s.score > self.fallback_threshold)
            .take(self.max_fallbacks)
            .map(|s| s.pattern)
            .collect()
    }
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Highest score; on ties the earlier entry wins.
///
/// Pass scores in tie-break order, as [`StrategySelector::score_patterns`]
/// returns them. An empty slice yields `direct` with a score of 0.
pub fn best_score(scores: &[PatternScore]) -> PatternScore {
    let mut best = scores.first().copied().unwrap_or(PatternScore { pattern: WorkflowPattern::Direct, score: 0.0 });
    for candidate in scores.iter().skip(1) {
        if candidate.score > best.score {
            best = *candidate;
        }
    }
    best
}

/// Names of servers offering any required capability, first-seen order.
///
/// A capability no server offers is skipped with a warning.
fn resolve_servers(analysis: &TaskAnalysis, available_servers: &[ServerProfile]) -> Vec<String> {
    let mut servers: Vec<String> = Vec::new();

    for capability in analysis.required_capabilities() {
        let mut satisfied = false;
        for server in available_servers.iter().filter(|s| s.has_category(capability.as_str())) {
            satisfied = true;
            if !servers.contains(&server.name) {
                servers.push(server.name.clone());
            }
        }
        if !satisfied {
            warn!(capability = %capability, "No available server provides required capability");
        }
    }

    servers
}

fn build_reasoning(pattern: WorkflowPattern, analysis: &TaskAnalysis) -> String {
    let mut reasoning = format!(
        "Selected {} pattern for {} complexity task.",
        pattern, analysis.complexity()
    );

    let detail = match pattern {
        WorkflowPattern::Direct => {
            "Task is simple enough for a single agent to handle directly.".to_string()
        }
        WorkflowPattern::Parallel => {
            if analysis.capability_count() > 1 {
                format!(
                    "Task requires {} capabilities that can be handled concurrently.",
                    analysis.capability_count()
                )
            } else {
                "Task contains independent subtasks that can run concurrently.".to_string()
            }
        }
        WorkflowPattern::Router => {
            "Task can be routed to the most suitable specialist agent.".to_string()
        }
        WorkflowPattern::Swarm => {
            "Task benefits from multiple agents handing off work dynamically.".to_string()
        }
        WorkflowPattern::Orchestrator => format!(
            "Task requires {} steps with coordination between agents.",
            analysis.estimated_steps()
        ),
        WorkflowPattern::EvaluatorOptimizer => {
            "Task requires iterative refinement to reach the desired quality.".to_string()
        }
    };
    reasoning.push(' ');
    reasoning.push_str(&detail);

    if analysis.requires_human_input() {
        reasoning.push_str(" Human input may be required during execution.");
    }

    reasoning
}
