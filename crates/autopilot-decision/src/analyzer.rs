//! Task analysis: free-text description to [`TaskAnalysis`].

use crate::config::DecisionConfig;
use crate::keywords::{
    self, ACTION_VERBS, CAPABILITY_KEYWORDS, COMPLEXITY_KEYWORDS, HUMAN_INPUT_KEYWORDS,
    ITERATION_KEYWORDS, PARALLEL_INDICATORS, SEQUENCING_WORDS, SEQUENTIAL_INDICATORS,
    VAGUE_INDICATORS,
};
use crate::types::{Capability, DEFAULT_CONFIDENCE, TaskAnalysis, TaskComplexity, clamp_confidence};
use std::collections::BTreeSet;
use tracing::debug;

/// Descriptions with more words than this earn the specificity bonus.
const SPECIFIC_WORD_COUNT: usize = 5;
const SPECIFICITY_BONUS: f64 = 0.1;
const VAGUENESS_PENALTY: f64 = 0.2;
const ACTION_VERB_BONUS: f64 = 0.1;

/// Turns task descriptions into structured analyses.
///
/// The analyzer holds only configuration; every call is a pure function of
/// the description.
#[derive(Debug, Clone)]
pub struct TaskAnalyzer {
    /// Confidence before adjustments.
    base_confidence: f64,
    /// Word count above which complexity escalates one level.
    escalation_word_count: usize,
}

impl TaskAnalyzer {
    /// Creates an analyzer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&DecisionConfig::default())
    }

    /// Creates an analyzer using the analysis settings from `config`.
    ///
    /// `config` need not have been validated: a non-finite base confidence
    /// falls back to the default and a finite one is clamped to [0, 1].
    #[must_use]
    pub fn with_config(config: &DecisionConfig) -> Self {
        let base_confidence = if config.base_confidence.is_finite() {
            config.base_confidence.clamp(0.0, 1.0)
        } else {
            DEFAULT_CONFIDENCE
        };
        Self {
            base_confidence,
            escalation_word_count: config.escalation_word_count,
        }
    }

    /// Analyzes a task description.
    ///
    /// Never fails: empty or unrecognized input yields a simple, one-step
    /// analysis with no capabilities and default confidence.
    pub fn analyze_task(&self, description: &str) -> TaskAnalysis {
        let lower = description.to_lowercase();
        let word_count = description.split_whitespace().count();

        let complexity = self.assess_complexity(&lower, word_count);
        let required_capabilities = identify_capabilities(&lower);
        let estimated_steps = estimate_steps(&lower, complexity);
        let parallelizable = is_parallelizable(&lower);
        let requires_iteration = keywords::contains_any(&lower, ITERATION_KEYWORDS);
        let requires_human_input = keywords::contains_any(&lower, HUMAN_INPUT_KEYWORDS);
        let confidence = self.calculate_confidence(&lower, word_count);

        debug!(
            complexity = %complexity,
            capabilities = required_capabilities.len(),
            estimated_steps,
            parallelizable,
            requires_iteration,
            requires_human_input,
            confidence,
            "Analyzed task"
        );

        TaskAnalysis::new(description, complexity)
            .with_capabilities(required_capabilities)
            .with_estimated_steps(estimated_steps)
            .with_parallelizable(parallelizable)
            .with_iteration(requires_iteration)
            .with_human_input(requires_human_input)
            .with_confidence(confidence)
    }

    /// Keyword level plus the connective and length escalations.
    fn assess_complexity(&self, lower: &str, word_count: usize) -> TaskComplexity {
        let mut complexity = keyword_complexity(lower);

        if keywords::count_phrase(lower, "and") > 0 && keywords::count_phrase(lower, "then") > 0 {
            complexity = complexity.escalate();
        }

        if word_count > self.escalation_word_count {
            complexity = complexity.escalate();
        }

        complexity
    }

    fn calculate_confidence(&self, lower: &str, word_count: usize) -> f64 {
        let mut confidence = self.base_confidence;

        if word_count > SPECIFIC_WORD_COUNT {
            confidence += SPECIFICITY_BONUS;
        }
        if keywords::contains_any(lower, VAGUE_INDICATORS) {
            confidence -= VAGUENESS_PENALTY;
        }
        if keywords::contains_any(lower, ACTION_VERBS) {
            confidence += ACTION_VERB_BONUS;
        }

        clamp_confidence(confidence)
    }
}

impl Default for TaskAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Highest complexity level whose keywords appear in `lower`, before any
/// escalation. Defaults to `Simple`.
pub(crate) fn keyword_complexity(lower: &str) -> TaskComplexity {
    COMPLEXITY_KEYWORDS
        .iter()
        .filter(|entry| keywords::contains_any(lower, entry.keywords))
        .map(|entry| entry.level)
        .max()
        .unwrap_or(TaskComplexity::Simple)
}

fn identify_capabilities(lower: &str) -> BTreeSet<Capability> {
    CAPABILITY_KEYWORDS
        .iter()
        .filter(|entry| keywords::contains_any(lower, entry.keywords))
        .map(|entry| entry.capability)
        .collect()
}

/// Base steps for the level plus one per "and", "then" and comma.
fn estimate_steps(lower: &str, complexity: TaskComplexity) -> u32 {
    let connectives = keywords::count_phrases(lower, SEQUENCING_WORDS);
    let commas = lower.matches(',').count();
    let indicators = u32::try_from(connectives + commas).unwrap_or(u32::MAX);
    complexity.base_steps().saturating_add(indicators)
}

/// Parallel indicators must at least match sequential ones.
fn is_parallelizable(lower: &str) -> bool {
    let parallel_score = keywords::count_phrases(lower, PARALLEL_INDICATORS);
    let sequential_score = keywords::count_phrases(lower, SEQUENTIAL_INDICATORS);
    parallel_score >= sequential_score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_defaults() {
        let analysis = TaskAnalyzer::new().analyze_task("");
        assert_eq!(analysis.complexity(), TaskComplexity::Simple);
        assert!(analysis.required_capabilities().is_empty());
        assert_eq!(analysis.estimated_steps(), 1);
        assert!(!analysis.requires_iteration());
        assert!(!analysis.requires_human_input());
        assert!((analysis.confidence() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_highest_keyword_level_wins() {
        assert_eq!(keyword_complexity("list and analyze the logs"), TaskComplexity::Complex);
        assert_eq!(keyword_complexity("build a distributed cache"), TaskComplexity::Expert);
        assert_eq!(keyword_complexity("hello there"), TaskComplexity::Simple);
    }

    #[test]
    fn test_and_then_escalates_once() {
        let analyzer = TaskAnalyzer::new();
        let analysis = analyzer.analyze_task("Create a folder and then copy the notes");
        assert_eq!(keyword_complexity("create a folder and then copy the notes"), TaskComplexity::Moderate);
        assert_eq!(analysis.complexity(), TaskComplexity::Complex);
    }

    #[test]
    fn test_connective_alone_does_not_escalate() {
        let analysis = TaskAnalyzer::new().analyze_task("Create a folder and copy the notes");
        assert_eq!(analysis.complexity(), TaskComplexity::Moderate);
    }

    #[test]
    fn test_long_description_escalates() {
        let analyzer = TaskAnalyzer::new();
        let words = vec!["word"; 21].join(" ");
        assert_eq!(analyzer.analyze_task(&words).complexity(), TaskComplexity::Moderate);

        let words = vec!["word"; 20].join(" ");
        assert_eq!(analyzer.analyze_task(&words).complexity(), TaskComplexity::Simple);
    }

    #[test]
    fn test_escalation_caps_at_expert() {
        let description = format!(
            "Design a distributed enterprise platform and then deploy it {}",
            vec!["carefully"; 20].join(" ")
        );
        let analysis = TaskAnalyzer::new().analyze_task(&description);
        assert_eq!(analysis.complexity(), TaskComplexity::Expert);
    }

    #[test]
    fn test_step_estimate_counts_connectives_and_commas() {
        let analysis = TaskAnalyzer::new().analyze_task("Download the report, convert it, and then email it");
        assert_eq!(analysis.complexity(), TaskComplexity::Complex);
        // Complex base of 5, plus "and", "then" and two commas
        assert_eq!(analysis.estimated_steps(), 9);
    }

    #[test]
    fn test_capabilities_are_not_exclusive() {
        let analysis = TaskAnalyzer::new().analyze_task("Search the web and save to a file");
        assert!(analysis.required_capabilities().contains(&Capability::WebSearch));
        assert!(analysis.required_capabilities().contains(&Capability::FileManagement));
    }

    #[test]
    fn test_sequential_indicators_block_parallelism() {
        let analyzer = TaskAnalyzer::new();
        assert!(!analyzer.analyze_task("Fetch the data, then clean it, then plot it").parallelizable());
        assert!(analyzer.analyze_task("Check multiple sites simultaneously").parallelizable());
    }

    #[test]
    fn test_parallel_tie_favors_parallelizable() {
        let analysis = TaskAnalyzer::new().analyze_task("Check both servers then report");
        assert!(analysis.parallelizable());
    }

    #[test]
    fn test_human_input_detection() {
        let analysis = TaskAnalyzer::new().analyze_task("Delete old branches after I approve the list");
        assert!(analysis.requires_human_input());
    }

    #[test]
    fn test_vague_language_lowers_confidence() {
        let analysis = TaskAnalyzer::new().analyze_task("maybe do something");
        assert!((analysis.confidence() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let analysis =
            TaskAnalyzer::new().analyze_task("Create and write a search index then analyze the results today");
        assert!((analysis.confidence() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_base_confidence_uses_default() {
        for base in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = DecisionConfig { base_confidence: base, ..DecisionConfig::default() };
            let analysis = TaskAnalyzer::with_config(&config).analyze_task("");
            assert!((analysis.confidence() - DEFAULT_CONFIDENCE).abs() < f64::EPSILON, "base {}", base);
        }
    }

    #[test]
    fn test_out_of_range_base_confidence_is_clamped() {
        let config = DecisionConfig { base_confidence: 4.0, ..DecisionConfig::default() };
        let analysis = TaskAnalyzer::with_config(&config).analyze_task("maybe");
        // Clamped to 1.0, then the vagueness penalty.
        assert!((analysis.confidence() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_custom_escalation_word_count() {
        let config = DecisionConfig { escalation_word_count: 3, ..DecisionConfig::default() };
        let analyzer = TaskAnalyzer::with_config(&config);
        assert_eq!(analyzer.analyze_task("one two three four").complexity(), TaskComplexity::Moderate);
    }
}
