//! Project-level driver for the checking pipeline.

use crate::pipeline;
use crate::utils::print_project_status;
use anyhow::{Context, Result};
use colored::Colorize;
use mlang_utils::{CONFIG_FILE, Config};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Checker for an mlang project.
pub struct Compiler {
    project_root: PathBuf,
    config: Config,
}

impl Compiler {
    /// Creates a compiler for the given project.
    ///
    /// # Errors
    /// Returns an error if the project configuration cannot be loaded.
    pub fn new(project_root: PathBuf) -> Result<Self> {
        let config = Config::load(project_root.join(CONFIG_FILE))?;
        Ok(Self {
            project_root,
            config,
        })
    }

    /// Checks the project and writes the decorated tree.
    ///
    /// # Errors
    /// Returns an error if checking fails or the output cannot be written.
    pub fn build(&self) -> Result<(PathBuf, Duration)> {
        let start = Instant::now();

        print_project_status("Building", &self.config, &self.project_root);

        let entry = self.config.entry_path(&self.project_root);
        let json = pipeline::build_pipeline(&entry, self.config.check.optimize)?;

        let output = self.config.output_path(&self.project_root);
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&output, json)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        let duration = start.elapsed();
        println!(
            "    {} decorated tree written to {} in {:.2}s",
            "Finished".green().bold(),
            output.display(),
            duration.as_secs_f64()
        );

        Ok((output, duration))
    }

    /// Checks the project for errors without writing anything.
    ///
    /// # Errors
    /// Returns an error if the project contains errors.
    pub fn check(&self) -> Result<Duration> {
        let start = Instant::now();

        print_project_status("Checking", &self.config, &self.project_root);

        let entry = self.config.entry_path(&self.project_root);
        pipeline::check_pipeline(&entry)?;

        let duration = start.elapsed();
        println!(
            "    {} project checked successfully in {:.2}s",
            "Finished".green().bold(),
            duration.as_secs_f64()
        );

        Ok(duration)
    }

    /// Returns the project root directory.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
