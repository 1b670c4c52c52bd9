//! Checking pipeline stages.
//!
//! Pipeline: JSON → Program (imports resolved) → Semantic → Optimizer → JSON

use anyhow::{Context, Result};
use mlang_ast::{ImportCache, Program};
use mlang_optimizer::Optimizer;
use std::path::Path;

use crate::loader;

/// Loads the entry program and everything it imports.
///
/// # Errors
/// Returns an error if a program cannot be read, parsed or resolved.
pub fn load(path: &Path) -> Result<Program> {
    let mut cache = ImportCache::new();
    loader::load_program(path, &mut cache)
}

/// Runs semantic analysis and returns the decorated program.
///
/// # Errors
/// Returns an error if semantic analysis fails; the diagnostic is printed to
/// stderr.
pub fn analyze(program: Program) -> Result<Program> {
    mlang_semantic::check(program).map_err(|e| {
        let report = miette::Report::new(e);
        eprintln!("{report:?}");
        anyhow::anyhow!("Semantic analysis failed")
    })
}

/// Folds constants until nothing changes.
pub fn optimize(program: &mut Program) {
    let rounds = Optimizer::new().optimize(program);
    tracing::debug!(rounds, "optimizer finished");
}

/// Serializes a program to pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn emit(program: &Program) -> Result<String> {
    serde_json::to_string_pretty(program).with_context(|| "Failed to serialize program")
}

/// Loads and checks the program at `path`.
///
/// # Errors
/// Returns an error if any stage fails.
pub fn check_pipeline(path: &Path) -> Result<Program> {
    let program = load(path)?;
    analyze(program)
}

/// Loads, checks and optionally optimizes the program at `path`, returning
/// the decorated tree as JSON.
///
/// # Errors
/// Returns an error if any stage fails.
pub fn build_pipeline(path: &Path, optimize_tree: bool) -> Result<String> {
    let mut program = check_pipeline(path)?;
    if optimize_tree {
        optimize(&mut program);
    }
    emit(&program)
}
