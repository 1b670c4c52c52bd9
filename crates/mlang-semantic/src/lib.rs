//! Semantic analysis for mlang programs.
//!
//! Checking runs in two passes over the whole tree, resolved imports
//! included:
//!
//! 1. every type named by a declaration must be a builtin or an object
//!    declared earlier;
//! 2. every function body is checked for variable declaration and use, and
//!    each expression is decorated with its inferred type.
//!
//! The first problem found aborts the check.

mod checker;
mod declarations;
mod environment;
mod symbol_table;

pub use checker::TypeChecker;
pub use declarations::{DeclaredTypes, check_type_declarations};
pub use environment::TypeEnvironment;
pub use symbol_table::{Symbol, SymbolTable};

use mlang_ast::Program;
use mlang_core::Result;

/// Checks a program and returns it with every expression decorated.
///
/// Imports must already be resolved.
///
/// # Errors
/// Returns [`mlang_core::Error::UndeclaredType`] from the declaration pass,
/// or a [`mlang_core::Problem`] wrapped in [`mlang_core::Error::Semantic`]
/// from the variable pass.
///
/// # Examples
/// ```
/// use mlang_ast::{Declaration, Expression, Program, Statement};
/// use mlang_core::Type;
///
/// let program = Program::new(vec![Declaration::function(
///     "main",
///     Type::void(),
///     vec![],
///     vec![Statement::define("x", Type::int32(), Expression::int(42))],
/// )]);
/// assert!(mlang_semantic::check(program).is_ok());
/// ```
pub fn check(program: Program) -> Result<Program> {
    let _span = tracing::debug_span!("check").entered();
    let program = check_type_declarations(program)?;
    checker::check_variables(program)
}
