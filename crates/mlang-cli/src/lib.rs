//! mlang CLI library for testing and reusability.

pub mod compiler;
pub mod loader;
pub mod pipeline;
pub mod utils;

pub use compiler::Compiler;
pub use mlang_utils::Config;
