use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    /// Git working directory to resolve against
    #[serde(default = "default_target")]
    pub target: PathBuf,

    /// Remote to fetch speculative base branches from
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Speculative base branch patterns, highest priority first
    /// (glob syntax: `release/*`, `develop`, ...)
    #[serde(default = "default_branches")]
    pub branches: Vec<String>,
}
