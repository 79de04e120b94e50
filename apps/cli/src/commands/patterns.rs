//! Pattern score table command.

use autopilot_decision::{AutonomousDecisionEngine, DecisionConfig, best_score};
use colored::Colorize;

/// Execute the patterns command.
///
/// Lists every workflow pattern with its score, in tie-break order, and marks
/// the one the engine would select. Servers are not resolved here.
pub fn execute(task: &str, config: &DecisionConfig) {
    let engine = AutonomousDecisionEngine::with_config(config);
    let analysis = engine.analyzer().analyze_task(task);
    let scores = engine.selector().score_patterns(&analysis);
    let selected = best_score(&scores).pattern;

    println!("{}", format!("autopilot patterns: {}", task).bold().cyan());
    println!();
    println!("  Complexity: {}", analysis.complexity());
    println!();

    for score in &scores {
        let line = format!("{:<20} {:.3}", score.pattern.as_str(), score.score);
        if score.pattern == selected {
            println!("  {} {}", "✓".green(), line.green());
        } else {
            println!("  {} {}", "•".dimmed(), line);
        }
    }
}
