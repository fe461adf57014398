// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query engine configuration.
//!
//! Stored as TOML:
//!
//! ```toml
//! name_field = "name"
//!
//! [hostname]
//! case_sensitive = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::filter::{name_filter, requested_names, Evaluator, Filter};
use crate::hostname::NameComponentMatcher;
use crate::value::FilterValue;

/// Settings shared by every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Field whose equality filters can be served by direct lookup.
    #[serde(default = "default_name_field")]
    pub name_field: String,
    #[serde(default)]
    pub hostname: HostnameConfig,
}

/// Hostname comparison settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostnameConfig {
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

fn default_name_field() -> String {
    "name".to_string()
}

fn default_case_sensitive() -> bool {
    true
}

impl Default for HostnameConfig {
    fn default() -> Self {
        HostnameConfig {
            case_sensitive: default_case_sensitive(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            name_field: default_name_field(),
            hostname: HostnameConfig::default(),
        }
    }
}

impl QueryConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: QueryConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Loads configuration from `path`, or the defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no query config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Saves configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.name_field.trim().is_empty() {
            return Err(Error::Config("name_field cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn name_matcher(&self) -> NameComponentMatcher {
        NameComponentMatcher::new(self.hostname.case_sensitive)
    }

    /// An evaluator using the configured hostname matcher.
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.name_matcher())
    }

    /// [`requested_names`] on the configured name field.
    pub fn requested_names(&self, filter: &Filter<String>) -> Option<Vec<FilterValue>> {
        requested_names(&self.name_field, filter)
    }

    /// [`name_filter`] on the configured name field.
    pub fn name_filter(&self, names: &[FilterValue]) -> Filter<String> {
        name_filter(&self.name_field, names)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
