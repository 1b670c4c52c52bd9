//! Loading JSON programs and resolving their imports.
//!
//! An import path names a JSON file relative to the importing file; a path
//! without an extension gets `.json`. Imports are cached by their path text,
//! so every program importing `"util"` shares one tree.

use anyhow::{Context, Result};
use mlang_ast::{ImportCache, Program};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the program at `path` and resolves its imports through `cache`.
///
/// # Errors
/// Returns an error if a file cannot be read or parsed, or if an import
/// imports itself.
pub fn load_program(path: &Path, cache: &mut ImportCache) -> Result<Program> {
    let _span = tracing::debug_span!("load", path = %path.display()).entered();

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut program = parse_program(&source)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    resolve_imports(&mut program, base, cache)?;
    Ok(program)
}

/// Parses a program from its JSON form without resolving imports.
///
/// # Errors
/// Returns an error if `source` is not a valid program.
pub fn parse_program(source: &str) -> Result<Program> {
    Ok(serde_json::from_str(source)?)
}

/// Attaches the program of every import of `program`, loading files
/// relative to `base` on a cache miss.
///
/// # Errors
/// Returns the first error met while loading an import.
pub fn resolve_imports(program: &mut Program, base: &Path, cache: &mut ImportCache) -> Result<()> {
    for import in &mut program.imports {
        let resolved = cache.resolve(&import.path, |cache, path| {
            load_program(&import_file(base, path), cache)
                .with_context(|| format!("Failed to import \"{path}\""))
        })?;
        import.program = Some(resolved);
    }
    Ok(())
}

fn import_file(base: &Path, path: &str) -> PathBuf {
    let file = base.join(path);
    if file.extension().is_some() {
        file
    } else {
        file.with_extension("json")
    }
}
