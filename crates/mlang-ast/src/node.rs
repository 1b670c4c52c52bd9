//! Heterogeneous node view of the tree used by the visitor.

use std::fmt;

use mlang_core::{Error, Result};

use crate::ast::{
    Declaration, Expression, ImportDeclaration, MethodCall, Parameter, Program, Property, Scope,
    Statement,
};

/// Discriminant of every node kind in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    Import,
    Function,
    Object,
    Parameter,
    Property,
    Scope,
    Let,
    Assignment,
    If,
    MethodCall,
    Arithmetic,
    Variable,
    Indexing,
    PropertyAccess,
    StringValue,
    IntValue,
    BoolValue,
    RealValue,
}

impl NodeKind {
    /// Kinds that only occur as statements.
    #[must_use]
    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            Self::Scope | Self::Let | Self::Assignment | Self::If | Self::MethodCall
        )
    }

    /// Kinds that occur as expressions. Method calls are both.
    #[must_use]
    pub const fn is_expression(self) -> bool {
        matches!(
            self,
            Self::MethodCall
                | Self::Arithmetic
                | Self::Variable
                | Self::Indexing
                | Self::PropertyAccess
                | Self::StringValue
                | Self::IntValue
                | Self::BoolValue
                | Self::RealValue
        )
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Import => "import",
            Self::Function => "function",
            Self::Object => "object",
            Self::Parameter => "parameter",
            Self::Property => "property",
            Self::Scope => "scope",
            Self::Let => "let",
            Self::Assignment => "assignment",
            Self::If => "if",
            Self::MethodCall => "methodCall",
            Self::Arithmetic => "arithmetic",
            Self::Variable => "variable",
            Self::Indexing => "indexing",
            Self::PropertyAccess => "propertyAccess",
            Self::StringValue => "stringValue",
            Self::IntValue => "intValue",
            Self::BoolValue => "boolValue",
            Self::RealValue => "realValue",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An owned tree node of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Program),
    Import(ImportDeclaration),
    Declaration(Declaration),
    Parameter(Parameter),
    Property(Property),
    Statement(Statement),
    Expression(Expression),
}

impl Node {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Program(_) => NodeKind::Program,
            Self::Import(_) => NodeKind::Import,
            Self::Declaration(Declaration::Function(_)) => NodeKind::Function,
            Self::Declaration(Declaration::Object(_)) => NodeKind::Object,
            Self::Parameter(_) => NodeKind::Parameter,
            Self::Property(_) => NodeKind::Property,
            Self::Statement(statement) => statement_kind(statement),
            Self::Expression(expression) => expression_kind(expression),
        }
    }

    /// Returns true if a node of one of `kinds` can occur strictly below this node.
    pub(crate) fn may_contain(&self, kinds: &[NodeKind]) -> bool {
        match self {
            Self::Program(_) | Self::Import(_) => true,
            Self::Declaration(Declaration::Function(_)) => kinds.iter().any(|kind| {
                *kind == NodeKind::Parameter || kind.is_statement() || kind.is_expression()
            }),
            Self::Declaration(Declaration::Object(_)) => kinds.contains(&NodeKind::Property),
            Self::Parameter(_) | Self::Property(_) => false,
            Self::Statement(_) => kinds
                .iter()
                .any(|kind| kind.is_statement() || kind.is_expression()),
            Self::Expression(_) => kinds.iter().any(|kind| kind.is_expression()),
        }
    }

    /// Clones the immediate children, in source order.
    pub(crate) fn children(&self) -> Vec<Node> {
        match self {
            Self::Program(program) => program
                .imports
                .iter()
                .cloned()
                .map(Node::Import)
                .chain(program.nodes.iter().cloned().map(Node::Declaration))
                .collect(),
            // Imported programs are walked by the visitor so shared trees stay shared.
            Self::Import(_) => Vec::new(),
            Self::Declaration(Declaration::Function(function)) => function
                .params
                .iter()
                .cloned()
                .map(Node::Parameter)
                .chain(std::iter::once(Node::Statement(Statement::Scope(
                    function.body.clone(),
                ))))
                .collect(),
            Self::Declaration(Declaration::Object(object)) => {
                object.properties.iter().cloned().map(Node::Property).collect()
            }
            Self::Parameter(_) | Self::Property(_) => Vec::new(),
            Self::Statement(statement) => statement_children(statement),
            Self::Expression(expression) => expression_children(expression),
        }
    }

    /// Replaces the immediate children with `children`, in source order.
    pub(crate) fn with_children(self, children: Vec<Node>) -> Result<Node> {
        let mut children = children.into_iter();
        let children = &mut children;
        let node = match self {
            Self::Program(mut program) => {
                for import in &mut program.imports {
                    *import = next(children)?.into_import()?;
                }
                for declaration in &mut program.nodes {
                    *declaration = next(children)?.into_declaration()?;
                }
                Self::Program(program)
            }
            Self::Declaration(Declaration::Function(mut function)) => {
                for param in &mut function.params {
                    *param = next(children)?.into_parameter()?;
                }
                function.body = next(children)?.into_scope()?;
                Self::Declaration(Declaration::Function(function))
            }
            Self::Declaration(Declaration::Object(mut object)) => {
                for property in &mut object.properties {
                    *property = next(children)?.into_property()?;
                }
                Self::Declaration(Declaration::Object(object))
            }
            leaf @ (Self::Import(_) | Self::Parameter(_) | Self::Property(_)) => leaf,
            Self::Statement(statement) => {
                Self::Statement(rebuild_statement(statement, children)?)
            }
            Self::Expression(expression) => {
                Self::Expression(rebuild_expression(expression, children)?)
            }
        };
        match children.next() {
            Some(extra) => Err(Error::Structure(format!(
                "unexpected extra child {}",
                extra.kind()
            ))),
            None => Ok(node),
        }
    }

    pub fn into_program(self) -> Result<Program> {
        match self {
            Self::Program(program) => Ok(program),
            other => Err(unexpected("program", &other)),
        }
    }

    pub fn into_import(self) -> Result<ImportDeclaration> {
        match self {
            Self::Import(import) => Ok(import),
            other => Err(unexpected("import", &other)),
        }
    }

    pub fn into_declaration(self) -> Result<Declaration> {
        match self {
            Self::Declaration(declaration) => Ok(declaration),
            other => Err(unexpected("declaration", &other)),
        }
    }

    pub fn into_parameter(self) -> Result<Parameter> {
        match self {
            Self::Parameter(param) => Ok(param),
            other => Err(unexpected("parameter", &other)),
        }
    }

    pub fn into_property(self) -> Result<Property> {
        match self {
            Self::Property(property) => Ok(property),
            other => Err(unexpected("property", &other)),
        }
    }

    pub fn into_statement(self) -> Result<Statement> {
        match self {
            Self::Statement(statement) => Ok(statement),
            // A call is a valid statement in either position.
            Self::Expression(Expression::MethodCall(call)) => Ok(Statement::MethodCall(call)),
            other => Err(unexpected("statement", &other)),
        }
    }

    pub fn into_scope(self) -> Result<Scope> {
        match self {
            Self::Statement(Statement::Scope(scope)) => Ok(scope),
            other => Err(unexpected("scope", &other)),
        }
    }

    pub fn into_expression(self) -> Result<Expression> {
        match self {
            Self::Expression(expression) => Ok(expression),
            Self::Statement(Statement::MethodCall(call)) => Ok(Expression::MethodCall(call)),
            other => Err(unexpected("expression", &other)),
        }
    }
}

fn statement_kind(statement: &Statement) -> NodeKind {
    match statement {
        Statement::Let { .. } => NodeKind::Let,
        Statement::Assignment { .. } => NodeKind::Assignment,
        Statement::If { .. } => NodeKind::If,
        Statement::MethodCall(_) => NodeKind::MethodCall,
        Statement::Scope(_) => NodeKind::Scope,
    }
}

fn expression_kind(expression: &Expression) -> NodeKind {
    match expression {
        Expression::MethodCall(_) => NodeKind::MethodCall,
        Expression::Arithmetic { .. } => NodeKind::Arithmetic,
        Expression::Variable { .. } => NodeKind::Variable,
        Expression::Indexing { .. } => NodeKind::Indexing,
        Expression::PropertyAccess { .. } => NodeKind::PropertyAccess,
        Expression::StringValue { .. } => NodeKind::StringValue,
        Expression::IntValue { .. } => NodeKind::IntValue,
        Expression::BoolValue { .. } => NodeKind::BoolValue,
        Expression::RealValue { .. } => NodeKind::RealValue,
    }
}

fn call_children(call: &MethodCall) -> Vec<Node> {
    std::iter::once(Node::Expression((*call.from).clone()))
        .chain(call.args.iter().cloned().map(Node::Expression))
        .collect()
}

fn statement_children(statement: &Statement) -> Vec<Node> {
    match statement {
        Statement::Let { assignment, .. } => {
            assignment.iter().cloned().map(Node::Expression).collect()
        }
        Statement::Assignment { to, value } => vec![
            Node::Expression(to.clone()),
            Node::Expression(value.clone()),
        ],
        Statement::If {
            condition,
            then,
            else_then,
        } => std::iter::once(Node::Expression(condition.clone()))
            .chain(std::iter::once(Node::Statement((**then).clone())))
            .chain(else_then.iter().map(|e| Node::Statement((**e).clone())))
            .collect(),
        Statement::MethodCall(call) => call_children(call),
        Statement::Scope(scope) => scope.lines.iter().cloned().map(Node::Statement).collect(),
    }
}

fn expression_children(expression: &Expression) -> Vec<Node> {
    match expression {
        Expression::MethodCall(call) => call_children(call),
        Expression::Arithmetic { left, right, .. } => vec![
            Node::Expression((**left).clone()),
            Node::Expression((**right).clone()),
        ],
        Expression::Indexing { from, index, .. } => vec![
            Node::Expression((**from).clone()),
            Node::Expression((**index).clone()),
        ],
        Expression::PropertyAccess { from, .. } => vec![Node::Expression((**from).clone())],
        Expression::Variable { .. }
        | Expression::StringValue { .. }
        | Expression::IntValue { .. }
        | Expression::BoolValue { .. }
        | Expression::RealValue { .. } => Vec::new(),
    }
}

fn rebuild_call(
    mut call: MethodCall,
    children: &mut impl Iterator<Item = Node>,
) -> Result<MethodCall> {
    *call.from = next(children)?.into_expression()?;
    for arg in &mut call.args {
        *arg = next(children)?.into_expression()?;
    }
    Ok(call)
}

fn rebuild_statement(
    statement: Statement,
    children: &mut impl Iterator<Item = Node>,
) -> Result<Statement> {
    Ok(match statement {
        Statement::Let {
            name,
            ty,
            assignment,
        } => Statement::Let {
            name,
            ty,
            assignment: match assignment {
                Some(_) => Some(next(children)?.into_expression()?),
                None => None,
            },
        },
        Statement::Assignment { .. } => Statement::Assignment {
            to: next(children)?.into_expression()?,
            value: next(children)?.into_expression()?,
        },
        Statement::If { else_then, .. } => {
            let condition = next(children)?.into_expression()?;
            let then = Box::new(next(children)?.into_statement()?);
            let else_then = match else_then {
                Some(_) => Some(Box::new(next(children)?.into_statement()?)),
                None => None,
            };
            Statement::If {
                condition,
                then,
                else_then,
            }
        }
        Statement::MethodCall(call) => Statement::MethodCall(rebuild_call(call, children)?),
        Statement::Scope(mut scope) => {
            for line in &mut scope.lines {
                *line = next(children)?.into_statement()?;
            }
            Statement::Scope(scope)
        }
    })
}

fn rebuild_expression(
    expression: Expression,
    children: &mut impl Iterator<Item = Node>,
) -> Result<Expression> {
    Ok(match expression {
        Expression::MethodCall(call) => Expression::MethodCall(rebuild_call(call, children)?),
        Expression::Arithmetic { operator, ty, .. } => Expression::Arithmetic {
            operator,
            left: Box::new(next(children)?.into_expression()?),
            right: Box::new(next(children)?.into_expression()?),
            ty,
        },
        Expression::Indexing { ty, .. } => Expression::Indexing {
            from: Box::new(next(children)?.into_expression()?),
            index: Box::new(next(children)?.into_expression()?),
            ty,
        },
        Expression::PropertyAccess { to, ty, .. } => Expression::PropertyAccess {
            from: Box::new(next(children)?.into_expression()?),
            to,
            ty,
        },
        leaf @ (Expression::Variable { .. }
        | Expression::StringValue { .. }
        | Expression::IntValue { .. }
        | Expression::BoolValue { .. }
        | Expression::RealValue { .. }) => leaf,
    })
}

fn next(children: &mut impl Iterator<Item = Node>) -> Result<Node> {
    children
        .next()
        .ok_or_else(|| Error::Structure("missing child node".to_string()))
}

fn unexpected(expected: &str, found: &Node) -> Error {
    Error::Structure(format!("expected {expected}, found {}", found.kind()))
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Self::Program(program)
    }
}

impl From<Declaration> for Node {
    fn from(declaration: Declaration) -> Self {
        Self::Declaration(declaration)
    }
}

impl From<Statement> for Node {
    fn from(statement: Statement) -> Self {
        Self::Statement(statement)
    }
}

impl From<Expression> for Node {
    fn from(expression: Expression) -> Self {
        Self::Expression(expression)
    }
}
