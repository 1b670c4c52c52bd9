//! Implementation of the `mlang new` command.

use anyhow::Result;
use mlang_cli::utils::{create_project, print_status};
use std::path::Path;

/// Executes the `new` command to create a new mlang project.
///
/// # Errors
/// Returns an error if the project directory already exists or if files cannot be created.
pub fn execute(name: &str) -> Result<()> {
    let project_dir = Path::new(name);

    if project_dir.exists() {
        anyhow::bail!("Directory '{name}' already exists");
    }

    create_project(project_dir, name)?;

    print_status("Created", &format!("mlang project '{name}'"));
    println!();
    println!("To get started:");
    println!("  cd {name}");
    println!("  mlang check");

    Ok(())
}
