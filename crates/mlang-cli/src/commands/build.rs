//! Implementation of the `mlang build` command.

use anyhow::Result;
use mlang_cli::Compiler;
use mlang_cli::utils::find_project;

/// Executes the `build` command: check, optimize and write the decorated tree.
///
/// # Errors
/// Returns an error if the project cannot be built.
pub fn execute() -> Result<()> {
    let (_config, project_root) = find_project()?;
    let compiler = Compiler::new(project_root)?;
    compiler.build()?;
    Ok(())
}
