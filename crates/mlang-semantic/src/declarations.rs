//! Type declaration checking.
//!
//! Every type named by a declaration must be a builtin or an object declared
//! earlier in visiting order. Objects register their name before their own
//! properties are checked, so an object may refer to itself.

use mlang_ast::{Declaration, Node, NodeKind, Program, Statement, visit_table};
use mlang_core::builtins::BUILTIN_TYPE_NAMES;
use mlang_core::{Error, Result, Type};

/// Node kinds that declare or name a type.
const DECLARING_KINDS: [NodeKind; 5] = [
    NodeKind::Object,
    NodeKind::Let,
    NodeKind::Function,
    NodeKind::Parameter,
    NodeKind::Property,
];

/// Ordered set of type names declared so far.
#[derive(Debug, Clone)]
pub struct DeclaredTypes {
    names: Vec<String>,
}

impl DeclaredTypes {
    /// Creates a set holding the builtin type names.
    pub fn new() -> Self {
        Self {
            names: BUILTIN_TYPE_NAMES.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn register(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }

    /// Names in the order they were declared, builtins first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    fn require(&self, ty: &Type) -> Result<()> {
        if self.contains(&ty.name) {
            Ok(())
        } else {
            Err(Error::UndeclaredType(ty.name.clone()))
        }
    }

    /// Registers or checks the type named by one declaring node.
    pub fn check_node(&mut self, node: &Node) -> Result<()> {
        match node {
            Node::Declaration(Declaration::Object(object)) => {
                self.register(&object.name);
                Ok(())
            }
            Node::Declaration(Declaration::Function(function)) => {
                self.require(&function.return_type)
            }
            Node::Parameter(parameter) => self.require(&parameter.ty),
            Node::Property(property) => self.require(&property.ty),
            Node::Statement(Statement::Let { ty, .. }) => self.require(ty),
            _ => Ok(()),
        }
    }
}

impl Default for DeclaredTypes {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks that every type named in `program` is declared before use.
///
/// # Errors
/// Returns [`Error::UndeclaredType`] for the first unknown type name.
pub fn check_type_declarations(program: Program) -> Result<Program> {
    let mut declared = DeclaredTypes::new();
    let tree = visit_table(
        &DECLARING_KINDS,
        |node, _| {
            declared.check_node(&node)?;
            Ok(node)
        },
        Node::Program(program),
        None,
    )?;
    tracing::debug!(types = declared.names.len(), "type declarations checked");
    tree.into_program()
}
