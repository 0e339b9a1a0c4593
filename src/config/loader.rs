//! Rules loading functionality.
//!
//! This module provides the [`RulesLoader`] type for loading the pay rules
//! from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayRules;

/// Loads and provides access to the pay rules.
///
/// The `RulesLoader` reads a `rules.yaml` file from a configuration
/// directory. Callers that have no rules directory can fall back to
/// [`PayRules::default`], which carries the legacy constants.
///
/// # Directory Structure
///
/// ```text
/// config/gov-atc/
/// └── rules.yaml   # Differentials, caps, leave and deduction policy
/// ```
///
/// # Example
///
/// ```no_run
/// use paytrack_engine::config::RulesLoader;
///
/// let loader = RulesLoader::load("./config/gov-atc").unwrap();
/// println!("night differential: {}", loader.rules().differentials.night);
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader {
    rules: PayRules,
}

impl RulesLoader {
    /// Loads the rules from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/gov-atc")
    ///
    /// # Returns
    ///
    /// Returns a `RulesLoader` on success, or an error if `rules.yaml` is
    /// missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rules_path = path.as_ref().join("rules.yaml");
        let path_str = rules_path.display().to_string();

        let content = fs::read_to_string(&rules_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rules = serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { rules })
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &PayRules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/gov-atc"
    }

    #[test]
    fn test_load_valid_rules() {
        let result = RulesLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load rules: {:?}", result.err());
    }

    #[test]
    fn test_loaded_rules_match_defaults() {
        // The shipped rules file carries the legacy constants.
        let loader = RulesLoader::load(config_path()).unwrap();
        assert_eq!(*loader.rules(), PayRules::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = RulesLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rules.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
