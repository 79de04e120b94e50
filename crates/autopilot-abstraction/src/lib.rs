//! Server profile abstraction layer for Autopilot.
//!
//! This module defines the read-only records the decision engine consumes to
//! decide which tool-providing servers satisfy a task's capabilities, and the
//! trait collaborators implement to hand over a snapshot of them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents an error raised by a server profile source.
///
/// The decision engine never catches or wraps these; they reach the caller
/// exactly as the source produced them.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceError {
    /// The source could not be reached (e.g., discovery service down).
    #[error("Server source unavailable: {0}")]
    Unavailable(String),

    /// A server record could not be interpreted.
    #[error("Malformed profile for server '{server}': {reason}")]
    MalformedProfile {
        /// The server whose record is malformed.
        server: String,
        /// Why the record was rejected.
        reason: String,
    },

    /// Other unexpected errors.
    #[error("Other Source Error: {0}")]
    Other(String),
}

/// A single tool exposed by a server, tagged with its capability category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCapability {
    /// Tool name as the server advertises it (e.g., "read_file").
    pub name: String,
    /// Capability category tag (e.g., "file_management").
    pub category: String,
    /// Optional human-readable description of the tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ToolCapability {
    /// Creates a capability record without a description.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self { name: name.into(), category: category.into(), description: None }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Describes an available tool-providing backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerProfile {
    /// Unique server identifier.
    pub name: String,
    /// Optional description of the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tools the server provides.
    #[serde(default)]
    pub capabilities: Vec<ToolCapability>,
}

impl ServerProfile {
    /// Creates a profile with no capabilities.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: None, capabilities: Vec::new() }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a tool capability.
    #[must_use]
    pub fn with_capability(mut self, capability: ToolCapability) -> Self {
        self.capabilities.push(capability);
        self
    }

    /// Returns true if any of the server's tools belongs to `category`.
    pub fn has_category(&self, category: &str) -> bool {
        self.capabilities.iter().any(|c| c.category == category)
    }

    /// Iterates over the distinct capability categories, in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        let mut seen: Vec<&str> = Vec::new();
        self.capabilities.iter().filter_map(move |c| {
            if seen.contains(&c.category.as_str()) {
                None
            } else {
                seen.push(c.category.as_str());
                Some(c.category.as_str())
            }
        })
    }
}

/// A read-only provider of server profiles.
///
/// Implementors hand the engine a snapshot; the engine never mutates or
/// re-discovers the servers behind it.
pub trait ServerSource {
    /// Returns the current snapshot of server profiles.
    ///
    /// # Errors
    /// Returns a [`SourceError`] when the snapshot cannot be produced.
    fn server_profiles(&self) -> Result<Vec<ServerProfile>, SourceError>;
}

impl ServerSource for [ServerProfile] {
    fn server_profiles(&self) -> Result<Vec<ServerProfile>, SourceError> {
        Ok(self.to_vec())
    }
}

impl ServerSource for Vec<ServerProfile> {
    fn server_profiles(&self) -> Result<Vec<ServerProfile>, SourceError> {
        Ok(self.clone())
    }
}
