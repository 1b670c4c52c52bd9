//! Expression type checking.
//!
//! Every checked expression is decorated with its inferred type, so a second
//! check of the same tree infers the same types.

use super::CheckResult;
use super::helpers::expect_type;
use crate::checker::core::TypeChecker;
use mlang_ast::Expression;
use mlang_core::{Problem, Type};

impl TypeChecker<'_> {
    /// Infers the type of an expression and records it on the node.
    pub(crate) fn check_expression(&mut self, expression: &mut Expression) -> CheckResult<Type> {
        let inferred = match expression {
            Expression::MethodCall(call) => return self.check_method_call(call),

            Expression::Arithmetic {
                operator,
                left,
                right,
                ..
            } => {
                let comparison = operator.is_comparison();
                let left_type = self.check_expression(left)?;
                let right_type = self.check_expression(right)?;
                expect_type(|| expression.to_string(), &left_type, &right_type)?;
                if comparison { Type::bool() } else { left_type }
            }

            Expression::Variable { name, .. } => self.variable_type(name)?,

            Expression::Indexing { from, index, .. } => {
                let from_type = self.check_l_statement(from)?;
                let index_type = self.check_expression(index)?;
                if !from_type.is_array {
                    return Err(Problem::TypeNotIndexable {
                        statement: from.to_string(),
                    });
                }
                if !index_type.is_indexer() {
                    return Err(Problem::TypeNotIndexer {
                        statement: index.to_string(),
                    });
                }
                from_type.element()
            }

            Expression::PropertyAccess { from, to, .. } => {
                let property = to.clone();
                let from_type = self.check_property_base(from)?;
                if from_type.is_array {
                    return Err(Problem::TypeNotIndexable {
                        statement: from.to_string(),
                    });
                }
                let object = self.environment.object(&from_type.name).ok_or_else(|| {
                    Problem::ObjectTypeMissing {
                        statement: expression.to_string(),
                    }
                })?;
                object.property(&property).cloned().ok_or_else(|| {
                    Problem::PropertyMissingFromObject {
                        statement: expression.to_string(),
                    }
                })?
            }

            Expression::StringValue { .. } => Type::string(),
            Expression::IntValue { .. } => Type::int32(),
            Expression::BoolValue { .. } => Type::bool(),
            Expression::RealValue { .. } => Type::real64(),
        };

        expression.decorate(inferred.clone());
        Ok(inferred)
    }

    /// Checks an expression that must denote a storage location or a callee.
    pub(crate) fn check_l_statement(&mut self, expression: &mut Expression) -> CheckResult<Type> {
        if expression.is_l_statement() {
            self.check_expression(expression)
        } else {
            Err(Problem::NotAddressable {
                statement: expression.to_string(),
            })
        }
    }

    fn variable_type(&self, name: &str) -> CheckResult<Type> {
        self.symbols
            .lookup(name)
            .map(|symbol| symbol.ty.clone())
            .ok_or_else(|| Problem::MissingVariable {
                name: name.to_string(),
            })
    }
}
