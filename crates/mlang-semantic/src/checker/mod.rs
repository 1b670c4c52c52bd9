//! Variable and type checking of function bodies.

mod calls;
mod core;
mod expressions;
mod helpers;
mod program;
mod statements;

pub use self::core::TypeChecker;
pub(crate) use program::check_variables;

/// Outcome of checking one node. The first problem aborts the check.
pub(crate) type CheckResult<T> = std::result::Result<T, mlang_core::Problem>;
