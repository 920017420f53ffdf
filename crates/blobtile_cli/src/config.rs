//! Configuration parsing for batch tileset generation.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Root configuration for a generation run.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Output directory, relative to the assets folder.
    pub output_dir: String,
    /// Source strips to expand, one tileset each.
    pub strips: Vec<StripConfig>,
}

/// One source strip entry.
#[derive(Debug, Deserialize)]
pub struct StripConfig {
    /// Tileset name; also the stem of the output files.
    pub name: String,
    /// Path to the five-tile strip image, relative to the assets folder.
    pub source: String,
}

impl Config {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Config::parse(&content)
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).context("Failed to parse config TOML")?;

        if config.strips.is_empty() {
            bail!("Config must list at least one strip");
        }
        let mut names = HashSet::new();
        for strip in &config.strips {
            if !names.insert(strip.name.as_str()) {
                bail!("Duplicate strip name '{}'", strip.name);
            }
        }

        Ok(config)
    }
}
