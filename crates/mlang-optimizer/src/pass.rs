//! Optimization pass trait.

use mlang_ast::Program;

/// Trait for optimization passes
pub trait OptimizationPass {
    /// Returns the name of the pass
    fn name(&self) -> &str;

    /// Runs the optimization pass on a program
    ///
    /// Returns `true` if any changes were made, `false` otherwise
    fn run(&self, program: &mut Program) -> bool;
}
