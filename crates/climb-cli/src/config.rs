//! CLI configuration: defaults, then an optional JSON file, then flags

use anyhow::{Context, Result};
use climb_core::ParserConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings read from `--config`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub parser: ParserConfig,
    /// Emit one JSON object per expression
    pub json: bool,
    /// Print the parenthesized tree before the value
    pub tree: bool,
}

/// Flag values that override the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub json: bool,
    pub tree: bool,
    pub unary_plus: bool,
    pub max_depth: Option<usize>,
}

impl CliConfig {
    /// Load a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: CliConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;
        Ok(config)
    }

    /// Resolve the effective configuration
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        config.parser.validate().context("Invalid parser configuration")?;

        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    fn apply(&mut self, overrides: &Overrides) {
        self.json |= overrides.json;
        self.tree |= overrides.tree;
        if overrides.unary_plus {
            self.parser = self.parser.clone().with_unary_plus();
        }
        if let Some(max_depth) = overrides.max_depth {
            self.parser.max_depth = max_depth;
        }
    }
}
