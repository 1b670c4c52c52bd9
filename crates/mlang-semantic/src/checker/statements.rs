//! Statement type checking.

use super::CheckResult;
use super::helpers::expect_type;
use crate::checker::core::TypeChecker;
use crate::symbol_table::Symbol;
use mlang_ast::{Scope, Statement};
use mlang_core::{Problem, Type};

impl TypeChecker<'_> {
    /// Checks every line of a scope in order, in the current scope.
    pub(crate) fn check_scope(&mut self, scope: &mut Scope) -> CheckResult<()> {
        for line in &mut scope.lines {
            self.check_statement(line)?;
        }
        Ok(())
    }

    /// Checks a statement.
    pub(crate) fn check_statement(&mut self, statement: &mut Statement) -> CheckResult<()> {
        match statement {
            Statement::Let {
                name,
                ty,
                assignment,
            } => {
                if self.symbols.is_declared(name) {
                    return Err(Problem::DuplicateVariable { name: name.clone() });
                }
                // The name is not visible inside its own initializer.
                let symbol = Symbol::new(name.clone(), ty.clone());
                if let Some(value) = assignment {
                    let found = self.check_expression(value)?;
                    expect_type(|| statement.to_string(), &symbol.ty, &found)?;
                }
                self.symbols.define(symbol)
            }

            Statement::Assignment { to, value } => {
                let found = self.check_expression(value)?;
                let expected = self.check_l_statement(to)?;
                expect_type(|| statement.to_string(), &expected, &found)
            }

            Statement::If {
                condition,
                then,
                else_then,
            } => {
                let condition_type = self.check_expression(condition)?;
                self.in_scope(|checker| checker.check_statement(then))?;
                if let Some(else_then) = else_then {
                    self.in_scope(|checker| checker.check_statement(else_then))?;
                }
                if condition_type.matches(&Type::bool()) {
                    Ok(())
                } else {
                    Err(Problem::IfNeedsBool {
                        statement: condition.to_string(),
                    })
                }
            }

            Statement::MethodCall(call) => self.check_method_call(call).map(drop),

            Statement::Scope(scope) => self.in_scope(|checker| checker.check_scope(scope)),
        }
    }
}
