//! Decision config validation command.

use anyhow::{Context, Result};
use autopilot_decision::{DecisionConfigLoader, WorkflowPattern};
use colored::Colorize;
use std::path::Path;

/// Execute the validate-config command.
///
/// Fails with the validation message if the file is unreadable or invalid.
pub fn execute(path: &Path) -> Result<()> {
    println!("{}", "autopilot validate-config".bold().cyan());
    println!();

    let config = DecisionConfigLoader::load(path)
        .with_context(|| format!("Invalid decision config {}", path.display()))?;

    let priority: Vec<&str> = config.pattern_priority.iter().map(|p| p.as_str()).collect();

    println!("  {} Configuration is valid: {}", "✓".green(), path.display());
    println!("  {} Base confidence: {}", "•".dimmed(), config.base_confidence);
    println!("  {} Escalation word count: {}", "•".dimmed(), config.escalation_word_count);
    println!(
        "  {} Fallbacks: up to {} above {}",
        "•".dimmed(),
        config.max_fallbacks,
        config.fallback_threshold
    );
    println!("  {} Pattern priority: {}", "•".dimmed(), priority.join(" > "));
    for pattern in WorkflowPattern::ALL {
        println!("  {} Base time ({}): {}s", "•".dimmed(), pattern, config.base_times.get(pattern));
    }

    Ok(())
}
