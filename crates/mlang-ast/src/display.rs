//! Canonical textual rendering of tree nodes.
//!
//! The rendering is deterministic and is what diagnostics quote.

use std::fmt;

use crate::ast::{
    Declaration, Expression, ImportDeclaration, MethodCall, Operator, Parameter, Property, Scope,
    Statement,
};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MethodCall(call) => write!(f, "{call}"),
            Self::Arithmetic {
                operator,
                left,
                right,
                ..
            } => write!(f, "({left} {operator} {right})"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Indexing { from, index, .. } => write!(f, "{from}[{index}]"),
            Self::PropertyAccess { from, to, .. } => write!(f, "{from}.{to}"),
            Self::StringValue { value, .. } => write!(f, "\"{value}\""),
            Self::IntValue { value, .. } => write!(f, "{value}"),
            Self::BoolValue { value, .. } => write!(f, "{value}"),
            Self::RealValue { value, .. } => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for MethodCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.from)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let {
                name,
                ty,
                assignment,
            } => {
                write!(f, "{ty} {name}")?;
                if let Some(value) = assignment {
                    write!(f, " = {value}")?;
                }
                Ok(())
            }
            Self::Assignment { to, value } => write!(f, "{to} = {value}"),
            Self::If {
                condition,
                then,
                else_then,
            } => {
                write!(f, "if ({condition})\nthen {then}")?;
                if let Some(else_then) = else_then {
                    write!(f, "\nelse {else_then}")?;
                }
                Ok(())
            }
            Self::MethodCall(call) => write!(f, "{call}"),
            Self::Scope(scope) => write!(f, "{scope}"),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {};", self.ty, self.name)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exported = if self.exported() { "export " } else { "" };
        match self {
            Self::Function(function) => {
                write!(f, "{exported}{} {}(", function.return_type, function.name)?;
                for (i, param) in function.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ")")
            }
            Self::Object(object) => write!(f, "{exported}type {}", object.name),
        }
    }
}

impl fmt::Display for ImportDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import \"{}\"", self.path)
    }
}
