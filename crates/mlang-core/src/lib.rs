//! Core types and utilities for the mlang toolchain.
//!
//! This crate provides the type representation, the builtin type table and
//! the error taxonomy shared by every analysis stage.

pub mod builtins;
pub mod error;
pub mod types;

pub use error::{Error, Problem, Result};
pub use types::{ObjectType, Type};
