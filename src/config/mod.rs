use std::fs;
use std::path::Path;

use tracing::debug;

use crate::ast::Block;
use crate::parser::{self, ParseOptions};
use crate::{JuniperError, export, serializer};

mod access;
mod helpers;

/// A parsed configuration together with the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct JuniperConfig {
    tree: Block,
    raw_content: String, // kept for line lookups in errors
}

impl JuniperConfig {
    /// Parse a configuration from a string, recovering from malformed input.
    pub fn from_str(content: &str) -> Self {
        Self {
            tree: parser::parse(content),
            raw_content: content.to_string(),
        }
    }

    /// Parse a configuration from a string with explicit options.
    pub fn from_str_with(content: &str, options: &ParseOptions) -> Result<Self, JuniperError> {
        Ok(Self {
            tree: parser::parse_with(content, options)?,
            raw_content: content.to_string(),
        })
    }

    /// Load a configuration file. A leading `~/` expands to the home directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = JuniperConfig::from_file("~/backups/r1.conf")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, JuniperError> {
        Self::from_file_with(path, &ParseOptions::default())
    }

    pub fn from_file_with<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Self, JuniperError> {
        let raw = path.as_ref().to_string_lossy().to_string();
        let resolved = helpers::expand_home(&raw)?;

        let content = fs::read_to_string(&resolved).map_err(|e| JuniperError::FileError {
            message: format!("Failed to read file: {}", e),
            path: resolved.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;
        debug!(path = %resolved.display(), bytes = content.len(), "loaded configuration file");

        Self::from_str_with(&content, options)
    }

    /// Load from the primary path, falling back to `fallback` if the primary
    /// can't be read. Parse errors from the primary are not masked.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, JuniperError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(JuniperError::FileError { .. }) => {
                Self::from_file(&fallback).map_err(|e| match e {
                    JuniperError::FileError { message, .. } => JuniperError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(301),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    pub fn tree(&self) -> &Block {
        &self.tree
    }

    pub fn into_tree(self) -> Block {
        self.tree
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// Render the tree back to configuration text.
    pub fn to_text(&self) -> String {
        serializer::serialize(&self.tree)
    }

    pub fn to_json(&self) -> Result<String, JuniperError> {
        export::export_to_json(&self.tree)
    }
}
