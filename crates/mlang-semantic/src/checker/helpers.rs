//! Helper functions for type checking.

use super::CheckResult;
use crate::checker::core::TypeChecker;
use mlang_core::{Problem, Type};

impl TypeChecker<'_> {
    /// Runs `check` inside a fresh scope, which is exited whether or not the
    /// check succeeds.
    pub(crate) fn in_scope<T>(
        &mut self,
        check: impl FnOnce(&mut Self) -> CheckResult<T>,
    ) -> CheckResult<T> {
        self.symbols.enter_scope();
        let result = check(self);
        self.symbols.exit_scope();
        result
    }
}

/// Fails with a type mismatch on `statement` unless `found` matches
/// `expected`.
pub(crate) fn expect_type(
    statement: impl FnOnce() -> String,
    expected: &Type,
    found: &Type,
) -> CheckResult<()> {
    if found.matches(expected) {
        Ok(())
    } else {
        Err(Problem::TypeMismatch {
            statement: statement(),
            expected: expected.clone(),
            found: found.clone(),
        })
    }
}
