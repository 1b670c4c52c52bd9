//! Generic tree visitor.
//!
//! Walks a tree in pre-order (parent before children, left to right, imports
//! before declarations) and replaces every node of the requested kinds with
//! the handler's result. Children are walked after their parent has been
//! replaced and receive the replaced parent as context.
//!
//! A program imported more than once through the same `Rc` is walked once,
//! and every import of it receives the same replaced `Rc`.

use std::collections::HashMap;
use std::rc::Rc;

use mlang_core::Result;

use crate::ast::{ImportDeclaration, Program};
use crate::node::{Node, NodeKind};

/// Replaces every node of `kind` under `tree` with `handler(node, parent)`.
///
/// # Errors
/// Returns the first error produced by `handler`, or a structure error if a
/// handler returns a node that does not fit its position.
pub fn visit<H>(kind: NodeKind, handler: H, tree: Node, parent: Option<&Node>) -> Result<Node>
where
    H: FnMut(Node, Option<&Node>) -> Result<Node>,
{
    visit_table(&[kind], handler, tree, parent)
}

/// Like [`visit`], but one handler serves every kind in `kinds`.
///
/// # Errors
/// Same as [`visit`].
pub fn visit_table<H>(
    kinds: &[NodeKind],
    handler: H,
    tree: Node,
    parent: Option<&Node>,
) -> Result<Node>
where
    H: FnMut(Node, Option<&Node>) -> Result<Node>,
{
    let mut visitor = Visitor {
        kinds,
        handler,
        shared: HashMap::new(),
    };
    visitor.walk(tree, parent)
}

struct Visitor<'k, H> {
    kinds: &'k [NodeKind],
    handler: H,
    /// Walked imports keyed by the original program. The original is held so
    /// its address cannot be reused while the walk runs.
    shared: HashMap<*const Program, (Rc<Program>, Rc<Program>)>,
}

impl<H> Visitor<'_, H>
where
    H: FnMut(Node, Option<&Node>) -> Result<Node>,
{
    fn walk(&mut self, node: Node, parent: Option<&Node>) -> Result<Node> {
        let node = if self.kinds.contains(&node.kind()) {
            (self.handler)(node, parent)?
        } else {
            node
        };

        if !node.may_contain(self.kinds) {
            return Ok(node);
        }

        if let Node::Import(import) = &node {
            let program = import
                .program
                .as_ref()
                .map(|original| self.walk_shared(original, &node))
                .transpose()?;
            return Ok(Node::Import(ImportDeclaration {
                path: import.path.clone(),
                program,
            }));
        }

        let children = node.children();
        let mut walked = Vec::with_capacity(children.len());
        for child in children {
            walked.push(self.walk(child, Some(&node))?);
        }
        node.with_children(walked)
    }

    fn walk_shared(&mut self, original: &Rc<Program>, import: &Node) -> Result<Rc<Program>> {
        let key = Rc::as_ptr(original);
        if let Some((_, walked)) = self.shared.get(&key) {
            return Ok(Rc::clone(walked));
        }

        let walked = self
            .walk(Node::Program(Program::clone(original)), Some(import))?
            .into_program()?;
        let walked = Rc::new(walked);
        self.shared.insert(key, (Rc::clone(original), Rc::clone(&walked)));
        Ok(walked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Declaration, Expression, Operator, Parameter, Statement};
    use mlang_core::{Error, Type};

    fn sample() -> Program {
        Program::new(vec![
            Declaration::object("Point", vec![]),
            Declaration::function(
                "main",
                Type::void(),
                vec![Parameter::new("a", Type::int32())],
                vec![
                    Statement::declare("x", Type::int32()),
                    Statement::scope(vec![Statement::define(
                        "y",
                        Type::int32(),
                        Expression::arithmetic(
                            Operator::Add,
                            Expression::int(1),
                            Expression::int(2),
                        ),
                    )]),
                ],
            ),
        ])
    }

    #[test]
    fn test_visit_order_is_pre_order() {
        let mut seen = Vec::new();
        let kinds = [
            NodeKind::Object,
            NodeKind::Function,
            NodeKind::Parameter,
            NodeKind::Let,
            NodeKind::IntValue,
        ];
        visit_table(
            &kinds,
            |node, _| {
                seen.push(node.kind());
                Ok(node)
            },
            Node::Program(sample()),
            None,
        )
        .unwrap();

        assert_eq!(
            seen,
            vec![
                NodeKind::Object,
                NodeKind::Function,
                NodeKind::Parameter,
                NodeKind::Let,
                NodeKind::Let,
                NodeKind::IntValue,
                NodeKind::IntValue,
            ]
        );
    }

    #[test]
    fn test_visit_replaces_nodes_in_place() {
        let tree = visit(
            NodeKind::IntValue,
            |node, _| match node {
                Node::Expression(Expression::IntValue { value, .. }) => {
                    Ok(Node::Expression(Expression::int(value * 10)))
                }
                other => Ok(other),
            },
            Node::Program(sample()),
            None,
        )
        .unwrap();

        let program = tree.into_program().unwrap();
        let Declaration::Function(main) = &program.nodes[1] else {
            panic!("expected function");
        };
        let Statement::Scope(inner) = &main.body.lines[1] else {
            panic!("expected scope");
        };
        assert_eq!(inner.lines[0].to_string(), "int32 y = (10 + 20)");
    }

    #[test]
    fn test_visit_passes_parent() {
        let mut parents = Vec::new();
        visit(
            NodeKind::Function,
            |node, parent| {
                parents.push(parent.map(Node::kind));
                Ok(node)
            },
            Node::Program(sample()),
            None,
        )
        .unwrap();
        assert_eq!(parents, vec![Some(NodeKind::Program)]);
    }

    #[test]
    fn test_visit_stops_at_first_error() {
        let mut calls = 0;
        let result = visit(
            NodeKind::Let,
            |_, _| {
                calls += 1;
                Err(Error::Structure("stop".to_string()))
            },
            Node::Program(sample()),
            None,
        );
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_handler_returning_wrong_kind_is_rejected() {
        let result = visit(
            NodeKind::Parameter,
            |_, _| Ok(Node::Expression(Expression::int(0))),
            Node::Program(sample()),
            None,
        );
        assert!(matches!(result, Err(Error::Structure(_))));
    }

    #[test]
    fn test_shared_imports_are_walked_once() {
        let library = Rc::new(sample());
        let program = Program::new(vec![]).with_imports(vec![
            ImportDeclaration::resolved("a", Rc::clone(&library)),
            ImportDeclaration::resolved("b", Rc::clone(&library)),
        ]);

        let mut functions = 0;
        let tree = visit(
            NodeKind::Function,
            |node, _| {
                functions += 1;
                Ok(node)
            },
            Node::Program(program),
            None,
        )
        .unwrap();
        assert_eq!(functions, 1);

        let program = tree.into_program().unwrap();
        let first = program.imports[0].program.as_ref().unwrap();
        let second = program.imports[1].program.as_ref().unwrap();
        assert!(Rc::ptr_eq(first, second));
    }

    #[test]
    fn test_distinct_imports_are_walked_separately() {
        let program = Program::new(vec![]).with_imports(vec![
            ImportDeclaration::resolved("a", Rc::new(sample())),
            ImportDeclaration::resolved("b", Rc::new(sample())),
        ]);

        let mut functions = 0;
        visit(
            NodeKind::Function,
            |node, _| {
                functions += 1;
                Ok(node)
            },
            Node::Program(program),
            None,
        )
        .unwrap();
        assert_eq!(functions, 2);
    }
}
