//! Tree optimizer for checked mlang programs.
//!
//! Passes rewrite the function bodies of a program in place. Imported
//! programs are shared and left untouched.

mod constant_folding;
mod pass;

pub use constant_folding::{ConstantFoldingPass, fold_expression};
pub use pass::OptimizationPass;

use mlang_ast::Program;

/// Upper bound on full rounds of passes.
const MAX_ITERATIONS: usize = 10;

/// Optimizer that applies multiple passes to a program
pub struct Optimizer {
    passes: Vec<Box<dyn OptimizationPass>>,
}

impl Optimizer {
    /// Creates a new optimizer with default passes
    #[must_use]
    pub fn new() -> Self {
        Self {
            passes: vec![Box::new(ConstantFoldingPass)],
        }
    }

    /// Creates an empty optimizer with no passes
    #[must_use]
    pub fn empty() -> Self {
        Self { passes: Vec::new() }
    }

    /// Adds an optimization pass
    pub fn add_pass(&mut self, pass: Box<dyn OptimizationPass>) -> &mut Self {
        self.passes.push(pass);
        self
    }

    /// Runs all optimization passes on the program
    ///
    /// Runs passes in order, repeating until no changes are made. Returns the
    /// number of rounds that changed something.
    pub fn optimize(&self, program: &mut Program) -> usize {
        let mut rounds = 0;

        loop {
            if rounds == MAX_ITERATIONS {
                tracing::warn!(rounds, "optimizer reached maximum iterations");
                break;
            }

            let mut changed = false;
            for pass in &self.passes {
                if pass.run(program) {
                    tracing::debug!(pass = pass.name(), round = rounds + 1, "pass changed program");
                    changed = true;
                }
            }

            if !changed {
                break;
            }
            rounds += 1;
        }

        rounds
    }

    /// Runs optimization passes once (no iteration)
    pub fn optimize_once(&self, program: &mut Program) -> bool {
        let mut changed = false;
        for pass in &self.passes {
            changed |= pass.run(program);
        }
        changed
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}
