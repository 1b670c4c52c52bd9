//! Implementation of the `mlang clean` command.

use anyhow::{Context, Result};
use colored::Colorize;
use mlang_cli::utils::{find_project, print_project_status};
use std::fs;

/// Executes the `clean` command to remove build artifacts.
///
/// # Errors
/// Returns an error if build artifacts cannot be removed.
pub fn execute() -> Result<()> {
    let (config, project_dir) = find_project()?;

    print_project_status("Cleaning", &config, &project_dir);

    let target_dir = project_dir.join("target");

    if target_dir.exists() {
        fs::remove_dir_all(&target_dir)
            .with_context(|| format!("Failed to remove {}", target_dir.display()))?;

        println!("    {} target directory removed", "Finished".green().bold());
    } else {
        println!(
            "    {} target directory does not exist, nothing to clean",
            "Finished".green().bold()
        );
    }

    Ok(())
}
