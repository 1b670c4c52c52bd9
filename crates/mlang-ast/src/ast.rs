//! Abstract Syntax Tree (AST) definitions for mlang.
//!
//! Nodes are produced by the front end and decorated in place by the checker:
//! every expression carries an optional inferred [`Type`] that is `None` until
//! the expression has been checked.

use std::rc::Rc;

use mlang_core::Type;
use serde::{Deserialize, Serialize};

/// A complete mlang program (compilation unit).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub imports: Vec<ImportDeclaration>,
    pub nodes: Vec<Declaration>,
}

/// `import "path";`
///
/// The resolved program is shared by identity through the import cache and is
/// never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    pub path: String,
    #[serde(skip)]
    pub program: Option<Rc<Program>>,
}

/// Top-level declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Declaration {
    Function(FunctionDeclaration),
    Object(ObjectDeclaration),
}

/// Function declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    #[serde(default)]
    pub exported: bool,
    pub name: String,
    #[serde(rename = "type")]
    pub return_type: Type,
    #[serde(default)]
    pub params: Vec<Parameter>,
    pub body: Scope,
}

/// Object (nominal record) declaration: `type Name { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDeclaration {
    #[serde(default)]
    pub exported: bool,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// Function parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

/// Object property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

/// A block of statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    pub lines: Vec<Statement>,
}

/// Statements in mlang.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Statement {
    /// Variable declaration: `type name [= expr];`
    Let {
        name: String,
        #[serde(rename = "type")]
        ty: Type,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assignment: Option<Expression>,
    },

    /// Assignment statement: `lvalue = expr;`
    Assignment { to: Expression, value: Expression },

    /// `if (condition) then [else else_then]`
    If {
        condition: Expression,
        then: Box<Statement>,
        #[serde(
            rename = "elseThen",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        else_then: Option<Box<Statement>>,
    },

    /// Method call used as a statement.
    MethodCall(MethodCall),

    /// Nested block.
    Scope(Scope),
}

/// Expressions (R-statements) in mlang.
///
/// `Variable`, `Indexing` and `PropertyAccess` are the addressable forms
/// (L-statements).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Expression {
    MethodCall(MethodCall),

    Arithmetic {
        operator: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        ty: Option<Type>,
    },

    Variable {
        name: String,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        ty: Option<Type>,
    },

    Indexing {
        from: Box<Expression>,
        index: Box<Expression>,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        ty: Option<Type>,
    },

    /// `from.to`; `from` is an L-statement or a method call.
    PropertyAccess {
        from: Box<Expression>,
        to: String,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        ty: Option<Type>,
    },

    StringValue {
        value: String,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        ty: Option<Type>,
    },

    IntValue {
        value: i64,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        ty: Option<Type>,
    },

    BoolValue {
        value: bool,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        ty: Option<Type>,
    },

    RealValue {
        value: f64,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        ty: Option<Type>,
    },
}

/// `from(args...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub from: Box<Expression>,
    #[serde(default)]
    pub args: Vec<Expression>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">=")]
    GreaterEqual,
    #[serde(rename = "<=")]
    LessEqual,
}

impl Operator {
    /// Returns true for `== != > < >= <=`.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        !matches!(
            self,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide
        )
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
        }
    }
}

impl Expression {
    /// Returns the inferred type written by the checker.
    #[must_use]
    pub fn ty(&self) -> Option<&Type> {
        match self {
            Self::MethodCall(call) => call.ty.as_ref(),
            Self::Arithmetic { ty, .. }
            | Self::Variable { ty, .. }
            | Self::Indexing { ty, .. }
            | Self::PropertyAccess { ty, .. }
            | Self::StringValue { ty, .. }
            | Self::IntValue { ty, .. }
            | Self::BoolValue { ty, .. }
            | Self::RealValue { ty, .. } => ty.as_ref(),
        }
    }

    /// Writes the inferred type onto the node, replacing an earlier one.
    pub fn decorate(&mut self, inferred: Type) {
        match self {
            Self::MethodCall(call) => call.ty = Some(inferred),
            Self::Arithmetic { ty, .. }
            | Self::Variable { ty, .. }
            | Self::Indexing { ty, .. }
            | Self::PropertyAccess { ty, .. }
            | Self::StringValue { ty, .. }
            | Self::IntValue { ty, .. }
            | Self::BoolValue { ty, .. }
            | Self::RealValue { ty, .. } => *ty = Some(inferred),
        }
    }

    /// Returns true for the addressable forms.
    #[must_use]
    pub const fn is_l_statement(&self) -> bool {
        matches!(
            self,
            Self::Variable { .. } | Self::Indexing { .. } | Self::PropertyAccess { .. }
        )
    }
}

impl Program {
    /// Iterates over the exported declarations.
    pub fn exported(&self) -> impl Iterator<Item = &Declaration> {
        self.nodes.iter().filter(|node| node.exported())
    }
}

impl Declaration {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Function(function) => &function.name,
            Self::Object(object) => &object.name,
        }
    }

    #[must_use]
    pub const fn exported(&self) -> bool {
        match self {
            Self::Function(function) => function.exported,
            Self::Object(object) => object.exported,
        }
    }
}
