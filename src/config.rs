use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::input;

/// Default config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "fuzzrank.toml";

/// Main configuration structure loaded from fuzzrank.toml
#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub defaults: Option<DefaultsConfig>,
    pub vocabulary: Option<VocabularyConfig>,
}

#[derive(Deserialize, Debug, Default)]
pub struct DefaultsConfig {
    /// Maximum distance to keep; -1 disables filtering
    pub threshold: Option<i64>,
    /// Maximum number of results; -1 means unlimited
    pub limit: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub words: Vec<String>,
    /// Word list file, one word per line
    pub file: Option<String>,
}

impl Config {
    /// Load config from file, or return default if no config exists.
    /// If an explicit path is provided via --config, it MUST exist (error if not).
    /// If no path is provided, check ./fuzzrank.toml (use default if not found).
    pub fn load(path: Option<&Path>) -> Result<Self, anyhow::Error> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    bail!("Config file not found: {}", p.display());
                }
                p
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    default_path
                } else {
                    return Ok(Config::default());
                }
            }
        };

        let contents = fs::read_to_string(config_path)?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate_paths()?;
        Ok(config)
    }

    /// Validate that configured paths are safe (no path traversal)
    fn validate_paths(&self) -> Result<(), anyhow::Error> {
        if let Some(ref vocabulary) = self.vocabulary {
            if let Some(ref p) = vocabulary.file {
                Self::validate_path(p, "vocabulary.file")?;
            }
        }
        Ok(())
    }

    /// Validate a single path doesn't contain path traversal
    fn validate_path(path: &str, field: &str) -> Result<(), anyhow::Error> {
        if path.contains("..") {
            bail!(
                "Invalid {} path '{}': paths cannot contain '..'",
                field,
                path
            );
        }
        if Path::new(path).is_absolute() {
            bail!("Invalid {} path '{}': paths must be relative", field, path);
        }
        Ok(())
    }

    /// Threshold with resolution order: CLI > config > `fallback`
    pub fn threshold(&self, cli: Option<i64>, fallback: i64) -> i64 {
        cli.or_else(|| self.defaults.as_ref().and_then(|d| d.threshold))
            .unwrap_or(fallback)
    }

    /// Limit with resolution order: CLI > config > `fallback`
    pub fn limit(&self, cli: Option<i64>, fallback: i64) -> i64 {
        cli.or_else(|| self.defaults.as_ref().and_then(|d| d.limit))
            .unwrap_or(fallback)
    }

    /// Vocabulary from `--vocabulary` if given, otherwise inline words plus
    /// the configured word list file.
    pub fn vocabulary(&self, cli_file: Option<&str>) -> Result<Vec<String>> {
        if let Some(path) = cli_file {
            let text = input::read_from_file(path)
                .with_context(|| format!("Failed to load vocabulary from {}", path))?;
            return Ok(input::lines_to_words(&text));
        }

        let Some(ref vocabulary) = self.vocabulary else {
            return Ok(Vec::new());
        };

        let mut words = vocabulary.words.clone();
        if let Some(ref file) = vocabulary.file {
            let text = fs::read_to_string(file)
                .with_context(|| format!("Failed to read vocabulary.file {}", file))?;
            words.extend(input::lines_to_words(&text));
        }
        Ok(words)
    }
}
