//! Error types and result aliases for the mlang toolchain.

use crate::Type;
use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the mlang toolchain.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Type {0} is not declared")]
    #[diagnostic(
        code(mlang::declaration::undeclared_type),
        help("declare the object type before the first declaration that uses it")
    )]
    UndeclaredType(String),

    #[error("Import \"{0}\" was not resolved before checking")]
    #[diagnostic(code(mlang::import::unresolved))]
    UnresolvedImport(String),

    #[error("Import \"{0}\" imports itself")]
    #[diagnostic(code(mlang::import::cyclic))]
    CyclicImport(String),

    #[error("Malformed tree: {0}")]
    Structure(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Semantic(#[from] Problem),
}

/// A single semantic problem found while checking a function body.
///
/// Statement payloads hold the canonical rendering of the offending node.
#[derive(Error, Debug, Clone, PartialEq, Diagnostic)]
pub enum Problem {
    #[error("Variable {name} is declared twice")]
    #[diagnostic(code(mlang::semantic::duplicate))]
    DuplicateVariable { name: String },

    #[error("Variable {name} is not declared")]
    #[diagnostic(code(mlang::semantic::missing))]
    MissingVariable { name: String },

    #[error("Type mismatch on: {statement} between {expected} and {found}")]
    #[diagnostic(code(mlang::semantic::type_mismatch))]
    TypeMismatch {
        statement: String,
        expected: Type,
        found: Type,
    },

    #[error("Type not indexable on: {statement}")]
    #[diagnostic(code(mlang::semantic::not_indexable))]
    TypeNotIndexable { statement: String },

    #[error("Type not an indexer on: {statement}")]
    #[diagnostic(
        code(mlang::semantic::not_an_indexer),
        help("arrays are indexed with int8, int16, int32, uint8, uint16 or uint32")
    )]
    TypeNotIndexer { statement: String },

    #[error("Type not a method on: {statement}")]
    #[diagnostic(code(mlang::semantic::not_a_method))]
    NotAMethod { statement: String },

    #[error("Property missing type declaration on: {statement}")]
    #[diagnostic(code(mlang::semantic::object_type_missing))]
    ObjectTypeMissing { statement: String },

    #[error("Property missing from object on: {statement}")]
    #[diagnostic(code(mlang::semantic::property_missing))]
    PropertyMissingFromObject { statement: String },

    #[error("Too many arguments in function call on: {statement}")]
    #[diagnostic(code(mlang::semantic::too_many_arguments))]
    TooManyArguments { statement: String },

    #[error("If statement needs a bool on: {statement}")]
    #[diagnostic(code(mlang::semantic::if_needs_bool))]
    IfNeedsBool { statement: String },

    #[error("Expression is not addressable: {statement}")]
    #[diagnostic(code(mlang::semantic::not_addressable))]
    NotAddressable { statement: String },
}

/// Result type alias using the mlang Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_messages() {
        let problem = Problem::TypeMismatch {
            statement: "int32 x = (1 == 1)".to_string(),
            expected: Type::int32(),
            found: Type::bool(),
        };
        insta::assert_snapshot!(
            problem.to_string(),
            @"Type mismatch on: int32 x = (1 == 1) between int32 and bool"
        );

        let problem = Problem::DuplicateVariable {
            name: "x".to_string(),
        };
        assert_eq!(problem.to_string(), "Variable x is declared twice");
    }

    #[test]
    fn test_semantic_error_is_transparent() {
        let error = Error::from(Problem::MissingVariable {
            name: "y".to_string(),
        });
        assert_eq!(error.to_string(), "Variable y is not declared");
        assert!(matches!(error, Error::Semantic(Problem::MissingVariable { .. })));
    }

    #[test]
    fn test_undeclared_type_message() {
        let error = Error::UndeclaredType("Foo".to_string());
        assert_eq!(error.to_string(), "Type Foo is not declared");
    }
}
