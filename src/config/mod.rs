mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use globset::Glob;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            target: default_target(),
            remote: default_remote(),
            branches: default_branches(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Every branch pattern must compile. An empty list is fine; it just
        // means resolution always yields "no speculative context".
        for pattern in &self.branches {
            Glob::new(pattern).map_err(|e| ConfigError::BranchPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.remote, "origin");
        assert_eq!(config.branches, vec!["master".to_string()]);
    }

    #[test]
    fn test_bad_pattern_rejected() {
        let config = Config {
            branches: vec!["release/[".to_string()],
            ..Config::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::BranchPattern { .. }));
    }

    #[test]
    fn test_empty_branch_list_is_valid() {
        let config = Config {
            branches: Vec::new(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_yaml() {
        let config: Config = serde_yaml::from_str("branches:\n  - release/*\n  - develop\n")
            .expect("should parse");
        assert_eq!(config.branches.len(), 2);
        assert_eq!(config.target, std::path::PathBuf::from("."));
    }
}
