//! Analyze command.
//!
//! Runs the decision engine on a task and prints the explained recommendation.

use anyhow::{Context, Result};
use autopilot_decision::{
    AutonomousDecisionEngine, DecisionConfig, ServerCatalog, StrategyRecommendation, TaskAnalysis,
};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonOutput<'a> {
    analysis: &'a TaskAnalysis,
    recommendation: &'a StrategyRecommendation,
}

/// Execute the analyze command.
pub fn execute(task: &str, servers: Option<&Path>, json: bool, config: &DecisionConfig) -> Result<()> {
    let engine = AutonomousDecisionEngine::with_config(config);

    let (analysis, recommendation) = match servers {
        Some(path) => {
            let catalog = ServerCatalog::load(path)
                .with_context(|| format!("Failed to load server catalog from {}", path.display()))?;
            engine.analyze_and_recommend_from(task, &catalog)?
        }
        None => engine.analyze_and_recommend(task, &[]),
    };

    if json {
        let output = JsonOutput { analysis: &analysis, recommendation: &recommendation };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", format!("autopilot analyze: {}", task).bold().cyan());
    println!();
    println!("{}", engine.explain_decision(&analysis, &recommendation));
    println!();
    println!(
        "  {} Run with the {} pattern",
        "✓".green(),
        recommendation.pattern.as_str().bold()
    );

    Ok(())
}
