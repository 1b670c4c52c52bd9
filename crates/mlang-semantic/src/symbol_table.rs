//! Symbol table for tracking variables and functions during semantic analysis.

use mlang_core::{Problem, Type};
use std::collections::HashMap;

/// Represents a symbol in the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// The name of the symbol
    pub name: String,
    /// The declared type of the symbol
    pub ty: Type,
}

impl Symbol {
    /// Creates a new symbol.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Symbol table for managing variable and function scopes.
///
/// The symbol table uses a stack of scopes to handle nested blocks and `if`
/// branches. A scope is discarded when it is exited, so its declarations are
/// never visible to the parent or to sibling scopes.
#[derive(Debug)]
pub struct SymbolTable {
    /// Stack of scopes, with the current scope at the top
    scopes: Vec<HashMap<String, Symbol>>,
}

impl SymbolTable {
    /// Creates a new symbol table with a global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }

    /// Enters a new scope.
    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Exits the current scope. The global scope is never exited.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Defines a new symbol in the current scope.
    ///
    /// # Errors
    /// Returns a duplicate problem if the name is visible from the current
    /// scope, whichever scope declared it.
    pub fn define(&mut self, symbol: Symbol) -> Result<(), Problem> {
        if self.is_declared(&symbol.name) {
            return Err(Problem::DuplicateVariable { name: symbol.name });
        }
        self.insert(symbol);
        Ok(())
    }

    /// Inserts a symbol into the current scope, replacing a previous one.
    pub fn insert(&mut self, symbol: Symbol) {
        if let Some(current_scope) = self.scopes.last_mut() {
            current_scope.insert(symbol.name.clone(), symbol);
        }
    }

    /// Looks up a symbol by name, searching from the current scope upwards.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable(name: &str, ty: Type) -> Symbol {
        Symbol::new(name, ty)
    }

    #[test]
    fn test_symbol_table_basic() {
        let mut table = SymbolTable::new();
        assert!(table.define(variable("x", Type::int32())).is_ok());

        let found = table.lookup("x").unwrap();
        assert_eq!(found.name, "x");
        assert_eq!(found.ty, Type::int32());
    }

    #[test]
    fn test_inner_scope_does_not_leak() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.define(variable("x", Type::string())).unwrap();
        assert!(table.is_declared("x"));
        table.exit_scope();

        assert!(table.lookup("x").is_none());
        // Redeclaring after the scope closed is fine.
        assert!(table.define(variable("x", Type::int32())).is_ok());
    }

    #[test]
    fn test_shadowing_an_outer_name_is_a_duplicate() {
        let mut table = SymbolTable::new();
        table.define(variable("x", Type::int32())).unwrap();
        table.enter_scope();

        let result = table.define(variable("x", Type::string()));
        assert_eq!(
            result,
            Err(Problem::DuplicateVariable {
                name: "x".to_string()
            })
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = SymbolTable::new();
        table.insert(variable("a", Type::int32()));
        table.insert(variable("a", Type::string()));
        assert_eq!(table.lookup("a").unwrap().ty, Type::string());
    }

    #[test]
    fn test_global_scope_is_never_exited() {
        let mut table = SymbolTable::new();
        table.define(variable("x", Type::int32())).unwrap();
        table.exit_scope();
        assert!(table.is_declared("x"));

        table.enter_scope();
        table.exit_scope();
        assert!(table.is_declared("x"));
    }
}
