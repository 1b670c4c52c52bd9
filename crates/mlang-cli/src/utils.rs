//! Utility functions and constants shared across the CLI.

use anyhow::{Context, Result};
use colored::Colorize;
use mlang_utils::{CONFIG_FILE, Config};
use std::fs;
use std::path::{Path, PathBuf};

/// Template for the entry program of new projects.
pub const MAIN_TEMPLATE: &str = r#"{
  "imports": [{ "path": "system" }],
  "nodes": [
    {
      "kind": "function",
      "exported": true,
      "name": "main",
      "type": { "name": "void" },
      "params": [],
      "body": {
        "lines": [
          {
            "kind": "methodCall",
            "from": { "kind": "variable", "name": "log" },
            "args": [{ "kind": "stringValue", "value": "Hello, mlang!" }]
          }
        ]
      }
    }
  ]
}
"#;

/// Finds the mlang project root and config.
///
/// # Errors
/// Returns an error if not in an mlang project directory.
pub fn find_project() -> Result<(Config, PathBuf)> {
    Config::find().with_context(|| "Not in an mlang project directory")
}

/// Writes `mlang.toml` and the entry program into `project_dir`.
///
/// An existing entry program is kept.
///
/// # Errors
/// Returns an error if a directory or file cannot be created.
pub fn create_project(project_dir: &Path, name: &str) -> Result<Config> {
    let config = Config::new(name);
    let entry = config.entry_path(project_dir);
    if let Some(parent) = entry.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    config.save(project_dir.join(CONFIG_FILE))?;

    if !entry.exists() {
        fs::write(&entry, MAIN_TEMPLATE)
            .with_context(|| format!("Failed to create {}", entry.display()))?;
    }

    Ok(config)
}

/// Prints a status message with colored output.
pub fn print_status(status: &str, message: &str) {
    println!("{} {message}", status.green().bold());
}

/// Prints a status message with project info.
pub fn print_project_status(status: &str, config: &Config, path: &Path) {
    println!(
        "{} {} v{} ({})",
        status.green().bold(),
        config.package.name,
        config.package.version,
        path.display()
    );
}
