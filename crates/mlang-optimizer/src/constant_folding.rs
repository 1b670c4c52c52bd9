//! Constant folding optimization pass.
//!
//! Evaluates arithmetic on literals at compile time.
//! Example: `(2 + (3 * 4))` becomes `14`

use std::cmp::Ordering;

use mlang_ast::{Declaration, Expression, MethodCall, Operator, Program, Scope, Statement};
use mlang_core::Type;

use super::OptimizationPass;

/// Constant folding optimization pass
pub struct ConstantFoldingPass;

impl OptimizationPass for ConstantFoldingPass {
    fn name(&self) -> &str {
        "ConstantFolding"
    }

    fn run(&self, program: &mut Program) -> bool {
        let mut changed = false;

        for declaration in &mut program.nodes {
            if let Declaration::Function(function) = declaration
                && fold_scope(&mut function.body)
            {
                changed = true;
            }
        }

        changed
    }
}

fn fold_scope(scope: &mut Scope) -> bool {
    let mut changed = false;
    for line in &mut scope.lines {
        if fold_statement(line) {
            changed = true;
        }
    }
    changed
}

/// Folds constants in a statement
fn fold_statement(statement: &mut Statement) -> bool {
    match statement {
        Statement::Let {
            assignment: Some(value),
            ..
        } => fold_expression(value),
        Statement::Let {
            assignment: None, ..
        } => false,
        Statement::Assignment { to, value } => fold_expression(to) | fold_expression(value),
        Statement::If {
            condition,
            then,
            else_then,
        } => {
            let mut changed = fold_expression(condition);
            if fold_statement(then) {
                changed = true;
            }
            if let Some(else_then) = else_then
                && fold_statement(else_then)
            {
                changed = true;
            }
            changed
        }
        Statement::MethodCall(call) => fold_call(call),
        Statement::Scope(scope) => fold_scope(scope),
    }
}

fn fold_call(call: &mut MethodCall) -> bool {
    let mut changed = fold_expression(&mut call.from);
    for arg in &mut call.args {
        if fold_expression(arg) {
            changed = true;
        }
    }
    changed
}

/// Folds constants in an expression, bottom-up (returns true if changed)
pub fn fold_expression(expr: &mut Expression) -> bool {
    match expr {
        Expression::Arithmetic {
            operator,
            left,
            right,
            ..
        } => {
            let changed = fold_expression(left) | fold_expression(right);

            if let Some(folded) = try_fold_arithmetic(*operator, left, right) {
                *expr = folded;
                return true;
            }

            changed
        }

        Expression::MethodCall(call) => fold_call(call),

        Expression::Indexing { from, index, .. } => {
            fold_expression(from) | fold_expression(index)
        }

        Expression::PropertyAccess { from, .. } => fold_expression(from),

        Expression::Variable { .. }
        | Expression::StringValue { .. }
        | Expression::IntValue { .. }
        | Expression::BoolValue { .. }
        | Expression::RealValue { .. } => false,
    }
}

/// A literal operand.
#[derive(Debug, Clone, Copy)]
enum Constant<'a> {
    Int(i64),
    Real(f64),
    Str(&'a str),
    Bool(bool),
}

impl<'a> Constant<'a> {
    fn of(expr: &'a Expression) -> Option<Self> {
        match expr {
            Expression::IntValue { value, .. } => Some(Self::Int(*value)),
            Expression::RealValue { value, .. } => Some(Self::Real(*value)),
            Expression::StringValue { value, .. } => Some(Self::Str(value)),
            Expression::BoolValue { value, .. } => Some(Self::Bool(*value)),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_real(self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(value as f64),
            Self::Real(value) => Some(value),
            Self::Str(_) | Self::Bool(_) => None,
        }
    }
}

/// Tries to fold an arithmetic node whose operands are both literals
fn try_fold_arithmetic(
    op: Operator,
    left: &Expression,
    right: &Expression,
) -> Option<Expression> {
    match (Constant::of(left)?, Constant::of(right)?) {
        (Constant::Int(l), Constant::Int(r)) => fold_integers(op, l, r),

        (Constant::Str(l), Constant::Str(r)) => compare(op, l.cmp(r)).map(bool_literal),

        (Constant::Bool(l), Constant::Bool(r)) => match op {
            Operator::Equal => Some(bool_literal(l == r)),
            Operator::NotEqual => Some(bool_literal(l != r)),
            _ => None,
        },

        (l, r) => fold_reals(op, l.as_real()?, r.as_real()?),
    }
}

#[allow(clippy::cast_precision_loss)]
fn fold_integers(op: Operator, l: i64, r: i64) -> Option<Expression> {
    if op.is_comparison() {
        return compare(op, l.cmp(&r)).map(bool_literal);
    }
    let value = match op {
        Operator::Add => l.checked_add(r)?,
        Operator::Subtract => l.checked_sub(r)?,
        Operator::Multiply => l.checked_mul(r)?,
        Operator::Divide if r != 0 => return Some(real_literal(l as f64 / r as f64)),
        _ => return None,
    };
    // Folded literals are int32; a result outside its range stays unfolded.
    i32::try_from(value).ok()?;
    Some(int_literal(value))
}

fn fold_reals(op: Operator, l: f64, r: f64) -> Option<Expression> {
    if op.is_comparison() {
        return compare(op, l.partial_cmp(&r)?).map(bool_literal);
    }
    let value = match op {
        Operator::Add => l + r,
        Operator::Subtract => l - r,
        Operator::Multiply => l * r,
        Operator::Divide if r != 0.0 => l / r,
        _ => return None,
    };
    Some(real_literal(value))
}

fn compare(op: Operator, ordering: Ordering) -> Option<bool> {
    let result = match op {
        Operator::Equal => ordering == Ordering::Equal,
        Operator::NotEqual => ordering != Ordering::Equal,
        Operator::Greater => ordering == Ordering::Greater,
        Operator::Less => ordering == Ordering::Less,
        Operator::GreaterEqual => ordering != Ordering::Less,
        Operator::LessEqual => ordering != Ordering::Greater,
        Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => {
            return None;
        }
    };
    Some(result)
}

fn int_literal(value: i64) -> Expression {
    let mut literal = Expression::int(value);
    literal.decorate(Type::int32());
    literal
}

fn real_literal(value: f64) -> Expression {
    let mut literal = Expression::real(value);
    literal.decorate(Type::real64());
    literal
}

fn bool_literal(value: bool) -> Expression {
    let mut literal = Expression::boolean(value);
    literal.decorate(Type::bool());
    literal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arithmetic(op: Operator, left: Expression, right: Expression) -> Expression {
        Expression::arithmetic(op, left, right)
    }

    #[test]
    fn test_fold_integer_add() {
        let mut expr = arithmetic(Operator::Add, Expression::int(2), Expression::int(3));
        assert!(fold_expression(&mut expr));
        assert!(matches!(expr, Expression::IntValue { value: 5, .. }));
        assert_eq!(expr.ty(), Some(&Type::int32()));
    }

    #[test]
    fn test_fold_nested_arithmetic() {
        // 2 + (3 * 4) should become 14 in one pass
        let mut expr = arithmetic(
            Operator::Add,
            Expression::int(2),
            arithmetic(Operator::Multiply, Expression::int(3), Expression::int(4)),
        );
        assert!(fold_expression(&mut expr));
        assert!(matches!(expr, Expression::IntValue { value: 14, .. }));
    }

    #[test]
    fn test_integer_division_is_real() {
        let mut expr = arithmetic(Operator::Divide, Expression::int(7), Expression::int(2));
        assert!(fold_expression(&mut expr));
        assert!(matches!(expr, Expression::RealValue { value, .. } if value == 3.5));
        assert_eq!(expr.ty(), Some(&Type::real64()));
    }

    #[test]
    fn test_real_operand_is_real() {
        let mut expr = arithmetic(Operator::Subtract, Expression::real(1.5), Expression::int(1));
        assert!(fold_expression(&mut expr));
        assert!(matches!(expr, Expression::RealValue { value, .. } if value == 0.5));
    }

    #[test]
    fn test_division_by_zero_is_not_folded() {
        let mut expr = arithmetic(Operator::Divide, Expression::int(1), Expression::int(0));
        assert!(!fold_expression(&mut expr));
        assert_eq!(expr.to_string(), "(1 / 0)");
    }

    #[test]
    fn test_overflow_is_not_folded() {
        let mut expr = arithmetic(Operator::Multiply, Expression::int(i64::MAX), Expression::int(2));
        assert!(!fold_expression(&mut expr));
    }

    #[test]
    fn test_results_outside_int32_are_not_folded() {
        let max = i64::from(i32::MAX);
        let mut expr = arithmetic(Operator::Add, Expression::int(max), Expression::int(1));
        assert!(!fold_expression(&mut expr));
        assert_eq!(expr.to_string(), "(2147483647 + 1)");

        let min = i64::from(i32::MIN);
        let mut expr = arithmetic(Operator::Subtract, Expression::int(min), Expression::int(1));
        assert!(!fold_expression(&mut expr));

        let mut expr = arithmetic(Operator::Add, Expression::int(max - 1), Expression::int(1));
        assert!(fold_expression(&mut expr));
        assert!(matches!(expr, Expression::IntValue { value, .. } if value == max));
    }

    #[test]
    fn test_fold_comparison() {
        let mut expr = arithmetic(Operator::Less, Expression::int(2), Expression::int(3));
        assert!(fold_expression(&mut expr));
        assert!(matches!(expr, Expression::BoolValue { value: true, .. }));
        assert_eq!(expr.ty(), Some(&Type::bool()));

        let mut expr = arithmetic(Operator::GreaterEqual, Expression::real(2.0), Expression::int(3));
        assert!(fold_expression(&mut expr));
        assert!(matches!(expr, Expression::BoolValue { value: false, .. }));
    }

    #[test]
    fn test_fold_string_comparison() {
        let mut expr = arithmetic(Operator::Less, Expression::string("abc"), Expression::string("abd"));
        assert!(fold_expression(&mut expr));
        assert!(matches!(expr, Expression::BoolValue { value: true, .. }));
    }

    #[test]
    fn test_strings_are_not_concatenated() {
        let mut expr = arithmetic(Operator::Add, Expression::string("a"), Expression::string("b"));
        assert!(!fold_expression(&mut expr));
    }

    #[test]
    fn test_bools_only_compare_for_equality() {
        let mut expr = arithmetic(Operator::NotEqual, Expression::boolean(true), Expression::boolean(false));
        assert!(fold_expression(&mut expr));
        assert!(matches!(expr, Expression::BoolValue { value: true, .. }));

        let mut expr = arithmetic(Operator::Less, Expression::boolean(true), Expression::boolean(false));
        assert!(!fold_expression(&mut expr));
    }

    #[test]
    fn test_variables_are_not_folded() {
        let mut expr = arithmetic(
            Operator::Add,
            Expression::variable("x"),
            arithmetic(Operator::Add, Expression::int(1), Expression::int(2)),
        );
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.to_string(), "(x + 3)");
    }
}
