//! Configuration file handling for mlang projects.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "mlang.toml";

/// Represents the mlang.toml configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub package: Package,
    #[serde(default)]
    pub check: CheckOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: String,
    #[serde(default = "default_edition")]
    pub edition: String,
}

/// The `[check]` table: what to check and where the decorated tree goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOptions {
    /// Program to check, relative to the project root.
    #[serde(default = "default_entry")]
    pub entry: PathBuf,
    /// Fold constants before writing the decorated tree.
    #[serde(default = "default_optimize")]
    pub optimize: bool,
    /// Where `build` writes the decorated tree; `target/<name>.json` if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

fn default_edition() -> String {
    "2024".to_string()
}

fn default_entry() -> PathBuf {
    PathBuf::from("src").join("main.json")
}

const fn default_optimize() -> bool {
    true
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            optimize: default_optimize(),
            output: None,
        }
    }
}

impl Config {
    /// Creates a new default configuration with the given project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            package: Package {
                name: name.into(),
                version: "0.1.0".to_string(),
                edition: default_edition(),
            },
            check: CheckOptions::default(),
        }
    }

    /// Loads configuration from a mlang.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse {CONFIG_FILE}"))
    }

    /// Saves configuration to a mlang.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Finds the mlang.toml file starting from the current directory.
    ///
    /// # Errors
    /// Returns an error if no mlang.toml is found in the current or parent directories.
    pub fn find() -> Result<(Self, PathBuf)> {
        let current_dir =
            std::env::current_dir().with_context(|| "Failed to get current directory")?;
        Self::find_from(current_dir)
    }

    /// Finds the mlang.toml file starting from `start` and walking up.
    ///
    /// Returns the configuration and the directory that holds it.
    ///
    /// # Errors
    /// Returns an error if no mlang.toml is found in `start` or its parents.
    pub fn find_from(start: impl Into<PathBuf>) -> Result<(Self, PathBuf)> {
        let mut current_dir = start.into();

        loop {
            let config_path = current_dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok((config, current_dir));
            }

            if !current_dir.pop() {
                anyhow::bail!(
                    "Could not find {CONFIG_FILE} in current directory or any parent directory"
                );
            }
        }
    }

    /// Entry program of the project rooted at `root`.
    #[must_use]
    pub fn entry_path(&self, root: &Path) -> PathBuf {
        root.join(&self.check.entry)
    }

    /// Output file for the decorated tree of the project rooted at `root`.
    #[must_use]
    pub fn output_path(&self, root: &Path) -> PathBuf {
        match &self.check.output {
            Some(output) => root.join(output),
            None => root
                .join("target")
                .join(format!("{}.json", self.package.name)),
        }
    }
}
