//! TOML configuration for the decision engine.

use crate::types::{DEFAULT_CONFIDENCE, WorkflowPattern};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading the file.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error.
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Base execution time per pattern, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaseTimes {
    pub direct: f64,
    pub parallel: f64,
    pub router: f64,
    pub swarm: f64,
    pub orchestrator: f64,
    pub evaluator_optimizer: f64,
}

impl BaseTimes {
    /// Base time for `pattern`.
    pub fn get(&self, pattern: WorkflowPattern) -> f64 {
        match pattern {
            WorkflowPattern::Direct => self.direct,
            WorkflowPattern::Parallel => self.parallel,
            WorkflowPattern::Router => self.router,
            WorkflowPattern::Swarm => self.swarm,
            WorkflowPattern::Orchestrator => self.orchestrator,
            WorkflowPattern::EvaluatorOptimizer => self.evaluator_optimizer,
        }
    }
}

impl Default for BaseTimes {
    fn default() -> Self {
        Self {
            direct: 10.0,
            parallel: 30.0,
            router: 15.0,
            swarm: 45.0,
            orchestrator: 60.0,
            evaluator_optimizer: 90.0,
        }
    }
}

/// Tunable constants for task analysis and strategy selection.
///
/// Every field is optional in TOML; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecisionConfig {
    /// Analysis confidence before adjustments.
    pub base_confidence: f64,

    /// Descriptions with more words than this escalate one complexity level.
    pub escalation_word_count: usize,

    /// Fallback patterns must score strictly above this.
    pub fallback_threshold: f64,

    /// Maximum number of fallback patterns.
    pub max_fallbacks: usize,

    /// Tie-break order: on equal scores the earlier pattern wins.
    pub pattern_priority: Vec<WorkflowPattern>,

    /// Base execution time per pattern.
    pub base_times: BaseTimes,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            base_confidence: DEFAULT_CONFIDENCE,
            escalation_word_count: 20,
            fallback_threshold: 0.3,
            max_fallbacks: 2,
            pattern_priority: WorkflowPattern::ALL.to_vec(),
            base_times: BaseTimes::default(),
        }
    }
}

impl DecisionConfig {
    /// Checks that every value is within its allowed range.
    ///
    /// # Errors
    /// Returns [`ConfigError::Validation`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.base_confidence) {
            return Err(ConfigError::Validation(format!(
                "Invalid base_confidence: {}. Must be between 0.0 and 1.0",
                self.base_confidence
            )));
        }

        if !(0.0..=1.0).contains(&self.fallback_threshold) {
            return Err(ConfigError::Validation(format!(
                "Invalid fallback_threshold: {}. Must be between 0.0 and 1.0",
                self.fallback_threshold
            )));
        }

        for pattern in WorkflowPattern::ALL {
            let occurrences = self.pattern_priority.iter().filter(|p| **p == pattern).count();
            if occurrences != 1 {
                return Err(ConfigError::Validation(format!(
                    "pattern_priority must list every pattern exactly once: '{}' appears {} times",
                    pattern, occurrences
                )));
            }
        }

        for pattern in WorkflowPattern::ALL {
            let time = self.base_times.get(pattern);
            if !time.is_finite() || time <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "Invalid base time for '{}': {}. Must be a positive number of seconds",
                    pattern, time
                )));
            }
        }

        Ok(())
    }
}

/// Configuration loader for decision settings.
pub struct DecisionConfigLoader;

impl DecisionConfigLoader {
    /// Loads and validates decision configuration from a TOML file.
    ///
    /// # Errors
    /// Returns error if file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<DecisionConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates decision configuration from TOML text.
    ///
    /// # Errors
    /// Returns error if the text cannot be parsed or validated.
    pub fn from_toml_str(content: &str) -> Result<DecisionConfig> {
        let config: DecisionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}
