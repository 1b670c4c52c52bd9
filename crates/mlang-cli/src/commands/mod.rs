//! Command implementations for the mlang CLI.

pub mod build;
pub mod check;
pub mod clean;
pub mod init;
pub mod new;
