//! Method call type checking.

use super::CheckResult;
use super::helpers::expect_type;
use crate::checker::core::TypeChecker;
use mlang_ast::{Expression, MethodCall};
use mlang_core::{Problem, Type};

impl TypeChecker<'_> {
    /// Checks a call and returns the callee's full function type.
    ///
    /// Arguments are matched positionally; a call may pass fewer arguments
    /// than the callee declares but never more.
    pub(crate) fn check_method_call(&mut self, call: &mut MethodCall) -> CheckResult<Type> {
        let method_type = self.check_l_statement(&mut call.from)?;
        let Some(params) = method_type.parameters() else {
            return Err(Problem::NotAMethod {
                statement: call.from.to_string(),
            });
        };

        for position in 0..call.args.len() {
            let found = self.check_expression(&mut call.args[position])?;
            let Some(expected) = params.get(position) else {
                return Err(Problem::TooManyArguments {
                    statement: call.to_string(),
                });
            };
            expect_type(|| call.to_string(), expected, &found)?;
        }

        call.ty = Some(method_type.clone());
        Ok(method_type)
    }

    /// Checks the left side of a property access. A call is allowed there so
    /// that `make().field` works.
    pub(crate) fn check_property_base(&mut self, from: &mut Expression) -> CheckResult<Type> {
        match from {
            Expression::MethodCall(call) => self.check_method_call(call),
            other => self.check_l_statement(other),
        }
    }
}
