//! Decision config discovery and loading.

use anyhow::{Context, Result};
use autopilot_decision::{DecisionConfig, DecisionConfigLoader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory holding autopilot settings, both project-local and per-user.
pub const CONFIG_DIR: &str = ".autopilot";

/// Decision config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "decision.toml";

/// Candidate config files, highest precedence first.
///
/// Configuration precedence:
/// 1. `--config` argument
/// 2. Local config file (./.autopilot/decision.toml)
/// 3. Global config file (~/.autopilot/decision.toml)
/// 4. Defaults
fn discovered_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_DIR).join(CONFIG_FILE));
    }
    paths
}

/// Load the decision config.
///
/// An explicit path must exist; discovered files are used only if present.
pub fn load_config(explicit: Option<&Path>) -> Result<DecisionConfig> {
    if let Some(path) = explicit {
        return DecisionConfigLoader::load(path)
            .with_context(|| format!("Failed to load decision config from {}", path.display()));
    }

    for path in discovered_paths() {
        if path.is_file() {
            debug!(path = %path.display(), "Using discovered decision config");
            return DecisionConfigLoader::load(&path)
                .with_context(|| format!("Failed to load decision config from {}", path.display()));
        }
    }

    Ok(DecisionConfig::default())
}
