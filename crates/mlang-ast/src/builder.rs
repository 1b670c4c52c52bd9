//! Constructors for building trees in memory.
//!
//! Every constructor produces an undecorated node.

use mlang_core::Type;

use crate::ast::{
    Declaration, Expression, FunctionDeclaration, ImportDeclaration, MethodCall,
    ObjectDeclaration, Operator, Parameter, Program, Property, Scope, Statement,
};

impl Program {
    #[must_use]
    pub fn new(nodes: Vec<Declaration>) -> Self {
        Self {
            imports: Vec::new(),
            nodes,
        }
    }

    #[must_use]
    pub fn with_imports(mut self, imports: Vec<ImportDeclaration>) -> Self {
        self.imports = imports;
        self
    }
}

impl ImportDeclaration {
    /// Creates an import that still has to be resolved.
    #[must_use]
    pub fn unresolved(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            program: None,
        }
    }

    #[must_use]
    pub fn resolved(path: impl Into<String>, program: std::rc::Rc<Program>) -> Self {
        Self {
            path: path.into(),
            program: Some(program),
        }
    }
}

impl Declaration {
    #[must_use]
    pub fn function(
        name: impl Into<String>,
        return_type: Type,
        params: Vec<Parameter>,
        lines: Vec<Statement>,
    ) -> Self {
        Self::Function(FunctionDeclaration {
            exported: false,
            name: name.into(),
            return_type,
            params,
            body: Scope::new(lines),
        })
    }

    #[must_use]
    pub fn object(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self::Object(ObjectDeclaration {
            exported: false,
            name: name.into(),
            properties,
        })
    }

    /// Marks the declaration as exported.
    #[must_use]
    pub fn export(mut self) -> Self {
        match &mut self {
            Self::Function(function) => function.exported = true,
            Self::Object(object) => object.exported = true,
        }
        self
    }
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl Property {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl Scope {
    #[must_use]
    pub fn new(lines: Vec<Statement>) -> Self {
        Self { lines }
    }
}

impl Statement {
    /// `type name;`
    #[must_use]
    pub fn declare(name: impl Into<String>, ty: Type) -> Self {
        Self::Let {
            name: name.into(),
            ty,
            assignment: None,
        }
    }

    /// `type name = value;`
    #[must_use]
    pub fn define(name: impl Into<String>, ty: Type, value: Expression) -> Self {
        Self::Let {
            name: name.into(),
            ty,
            assignment: Some(value),
        }
    }

    #[must_use]
    pub fn assign(to: Expression, value: Expression) -> Self {
        Self::Assignment { to, value }
    }

    #[must_use]
    pub fn if_then(condition: Expression, then: Statement, else_then: Option<Statement>) -> Self {
        Self::If {
            condition,
            then: Box::new(then),
            else_then: else_then.map(Box::new),
        }
    }

    #[must_use]
    pub fn call(from: Expression, args: Vec<Expression>) -> Self {
        Self::MethodCall(MethodCall::new(from, args))
    }

    #[must_use]
    pub fn scope(lines: Vec<Statement>) -> Self {
        Self::Scope(Scope::new(lines))
    }
}

impl MethodCall {
    #[must_use]
    pub fn new(from: Expression, args: Vec<Expression>) -> Self {
        Self {
            from: Box::new(from),
            args,
            ty: None,
        }
    }
}

impl Expression {
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable {
            name: name.into(),
            ty: None,
        }
    }

    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::IntValue { value, ty: None }
    }

    #[must_use]
    pub fn real(value: f64) -> Self {
        Self::RealValue { value, ty: None }
    }

    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringValue {
            value: value.into(),
            ty: None,
        }
    }

    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::BoolValue { value, ty: None }
    }

    #[must_use]
    pub fn arithmetic(operator: Operator, left: Expression, right: Expression) -> Self {
        Self::Arithmetic {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            ty: None,
        }
    }

    #[must_use]
    pub fn index(from: Expression, index: Expression) -> Self {
        Self::Indexing {
            from: Box::new(from),
            index: Box::new(index),
            ty: None,
        }
    }

    #[must_use]
    pub fn property(from: Expression, to: impl Into<String>) -> Self {
        Self::PropertyAccess {
            from: Box::new(from),
            to: to.into(),
            ty: None,
        }
    }

    #[must_use]
    pub fn call(from: Expression, args: Vec<Expression>) -> Self {
        Self::MethodCall(MethodCall::new(from, args))
    }
}
