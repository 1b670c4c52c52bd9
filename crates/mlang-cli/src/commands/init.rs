//! Implementation of the `mlang init` command.

use anyhow::{Context, Result};
use mlang_cli::utils::{create_project, print_status};
use mlang_utils::CONFIG_FILE;

/// Executes the `init` command to initialize a project in the current directory.
///
/// # Errors
/// Returns an error if mlang.toml already exists or if files cannot be created.
pub fn execute() -> Result<()> {
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

    if current_dir.join(CONFIG_FILE).exists() {
        anyhow::bail!("{CONFIG_FILE} already exists in current directory");
    }

    let project_name = current_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("mlang-project")
        .to_string();

    create_project(&current_dir, &project_name)?;

    print_status("Created", &format!("mlang project '{project_name}'"));
    println!();
    println!("To get started:");
    println!("  mlang check");

    Ok(())
}
