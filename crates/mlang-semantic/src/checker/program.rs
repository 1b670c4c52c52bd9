//! Program-level checking: one pass over every function.

use super::CheckResult;
use crate::checker::core::TypeChecker;
use crate::environment::TypeEnvironment;
use crate::symbol_table::Symbol;
use mlang_ast::{Declaration, FunctionDeclaration, Node, NodeKind, Program, visit};
use mlang_core::{Error, Result};

impl TypeChecker<'_> {
    /// Checks a function body with its parameters in scope.
    ///
    /// Parameters are not checked against each other or against function
    /// names; a parameter hides a function of the same name.
    pub fn check_function(&mut self, function: &mut FunctionDeclaration) -> CheckResult<()> {
        for parameter in &function.params {
            self.symbols.insert(Symbol::new(parameter.name.clone(), parameter.ty.clone()));
        }
        self.check_scope(&mut function.body)
    }
}

/// Checks every function of `program` and of its resolved imports.
pub(crate) fn check_variables(program: Program) -> Result<Program> {
    let tree = visit(
        NodeKind::Function,
        |node, parent| match node {
            Node::Declaration(Declaration::Function(mut function)) => {
                let Some(Node::Program(program)) = parent else {
                    return Err(Error::Structure(format!(
                        "function {} is not declared in a program",
                        function.name
                    )));
                };
                let environment = TypeEnvironment::from_program(program)?;
                tracing::debug!(function = %function.name, "checking function");
                TypeChecker::new(&environment).check_function(&mut function)?;
                Ok(Node::Declaration(Declaration::Function(function)))
            }
            other => Ok(other),
        },
        Node::Program(program),
        None,
    )?;
    tree.into_program()
}
