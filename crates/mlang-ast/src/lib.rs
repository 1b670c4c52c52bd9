//! Syntax tree for mlang programs.
//!
//! This crate defines the tree the front end produces and the checker
//! decorates, its canonical rendering, the generic visitor that drives the
//! checking passes, and the import cache.

pub mod ast;
mod builder;
mod display;
pub mod imports;
pub mod node;
pub mod visitor;

pub use ast::{
    Declaration, Expression, FunctionDeclaration, ImportDeclaration, MethodCall,
    ObjectDeclaration, Operator, Parameter, Program, Property, Scope, Statement,
};
pub use imports::{ImportCache, SYSTEM_MODULE, system_module};
pub use node::{Node, NodeKind};
pub use visitor::{visit, visit_table};
