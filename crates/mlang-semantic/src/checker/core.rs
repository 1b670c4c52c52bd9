//! Core type checker structure.

use crate::environment::TypeEnvironment;
use crate::symbol_table::{Symbol, SymbolTable};

/// Type checker for one function body.
///
/// The global scope holds every function visible to the program; parameters
/// and top-level `let` declarations of the body share it.
pub struct TypeChecker<'env> {
    /// Symbol table for tracking variables and functions
    pub(crate) symbols: SymbolTable,
    /// Functions and object types of the enclosing program
    pub(crate) environment: &'env TypeEnvironment,
}

impl<'env> TypeChecker<'env> {
    /// Creates a checker whose global scope holds the functions of
    /// `environment`.
    pub fn new(environment: &'env TypeEnvironment) -> Self {
        let mut symbols = SymbolTable::new();
        for (name, ty) in environment.functions() {
            symbols.insert(Symbol::new(name, ty.clone()));
        }
        Self {
            symbols,
            environment,
        }
    }
}
