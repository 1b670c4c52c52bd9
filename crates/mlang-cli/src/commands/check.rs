//! Implementation of the `mlang check` command.

use anyhow::Result;
use mlang_cli::Compiler;
use mlang_cli::utils::find_project;

/// Executes the `check` command to validate the project without writing
/// anything.
///
/// # Errors
/// Returns an error if the project does not check.
pub fn execute() -> Result<()> {
    let (_config, project_root) = find_project()?;
    let compiler = Compiler::new(project_root)?;
    compiler.check()?;
    Ok(())
}
