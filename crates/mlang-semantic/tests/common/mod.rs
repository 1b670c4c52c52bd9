//! Common test utilities for semantic analysis tests.

#![allow(dead_code)]

use std::rc::Rc;

use mlang_ast::{Declaration, ImportDeclaration, Parameter, Program, Statement, system_module};
use mlang_core::{Error, Problem, Result, Type};

/// Wraps `lines` in `void main()` of a program that imports `system`.
pub fn main_with(lines: Vec<Statement>) -> Program {
    program(vec![], vec![], lines)
}

/// Like [`main_with`], with extra declarations before `main`.
pub fn program_with(nodes: Vec<Declaration>, lines: Vec<Statement>) -> Program {
    program(nodes, vec![], lines)
}

/// Builds `nodes` followed by `void main(params) { lines }`, importing
/// `system`.
pub fn program(
    mut nodes: Vec<Declaration>,
    params: Vec<Parameter>,
    lines: Vec<Statement>,
) -> Program {
    nodes.push(Declaration::function("main", Type::void(), params, lines));
    Program::new(nodes).with_imports(vec![ImportDeclaration::resolved(
        "system",
        Rc::new(system_module()),
    )])
}

pub fn check(program: Program) -> Result<Program> {
    mlang_semantic::check(program)
}

/// Helper function to check if a program passes semantic analysis.
pub fn should_pass(program: Program) -> bool {
    check(program).is_ok()
}

/// Helper function to check if a program fails semantic analysis.
pub fn should_fail(program: Program) -> bool {
    check(program).is_err()
}

/// Returns the semantic problem a program fails with.
pub fn problem(program: Program) -> Problem {
    match check(program) {
        Err(Error::Semantic(problem)) => problem,
        other => panic!("expected a semantic problem, got {other:?}"),
    }
}

/// Returns the body of `main` after a successful check.
pub fn checked_main(program: Program) -> Vec<Statement> {
    let program = check(program).unwrap();
    program
        .nodes
        .into_iter()
        .find_map(|node| match node {
            Declaration::Function(function) if function.name == "main" => {
                Some(function.body.lines)
            }
            _ => None,
        })
        .expect("main is declared")
}
