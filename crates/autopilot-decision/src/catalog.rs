//! Server catalog loaded from TOML.
//!
//! ```toml
//! [[servers]]
//! name = "filesystem"
//! description = "Local file access"
//!
//! [[servers.capabilities]]
//! name = "read_file"
//! category = "file_management"
//! ```

use crate::keywords::categorize_tool;
use crate::types::Capability;
use autopilot_abstraction::{ServerProfile, ServerSource, SourceError, ToolCapability};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while loading a server catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error reading the file.
    #[error("Failed to read server catalog: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("Failed to parse server catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// Catalog validation error.
    #[error("Invalid server catalog: {0}")]
    Validation(String),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    servers: Vec<ServerProfile>,
}

/// An in-memory snapshot of available servers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerCatalog {
    servers: Vec<ServerProfile>,
}

impl ServerCatalog {
    /// Builds a catalog from profiles, validating names.
    ///
    /// # Errors
    /// Returns [`CatalogError::Validation`] for empty or duplicate names.
    pub fn from_profiles(servers: Vec<ServerProfile>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        for server in &servers {
            if server.name.trim().is_empty() {
                return Err(CatalogError::Validation("Server name must not be empty".to_string()));
            }
            if !names.insert(server.name.as_str()) {
                return Err(CatalogError::Validation(format!("Duplicate server name '{}'", server.name)));
            }
            for capability in &server.capabilities {
                if capability.category.parse::<Capability>().is_err() {
                    warn!(
                        server = %server.name,
                        tool = %capability.name,
                        category = %capability.category,
                        "Tool category is not a known capability and will never be required"
                    );
                }
            }
        }

        debug!(servers = servers.len(), "Loaded server catalog");
        Ok(Self { servers })
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    /// Returns error if the text cannot be parsed or validated.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_profiles(file.servers)
    }

    /// All profiles, in file order.
    pub fn profiles(&self) -> &[ServerProfile] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Servers offering `capability`.
    pub fn servers_for(&self, capability: Capability) -> impl Iterator<Item = &ServerProfile> {
        self.servers.iter().filter(move |s| s.has_category(capability.as_str()))
    }
}

impl ServerSource for ServerCatalog {
    fn server_profiles(&self) -> Result<Vec<ServerProfile>, SourceError> {
        Ok(self.servers.clone())
    }
}

/// Builds a tool record whose category is inferred from its name and
/// description. Returns `None` if no capability keyword matches.
pub fn categorized_tool(name: &str, description: Option<&str>) -> Option<ToolCapability> {
    let capability = categorize_tool(name, description)?;
    let tool = ToolCapability::new(name, capability.as_str());
    Some(match description {
        Some(description) => tool.with_description(description),
        None => tool,
    })
}
