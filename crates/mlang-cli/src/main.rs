//! Command-line interface for the mlang checker.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mlang")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new mlang project
    #[command(visible_alias = "n")]
    New {
        /// Name of the project to create
        name: String,
    },

    /// Initialize an mlang project in an existing directory
    Init,

    /// Check, optimize and write the decorated tree of the current project
    #[command(visible_alias = "b")]
    Build,

    /// Check the current project for errors
    #[command(visible_alias = "c")]
    Check,

    /// Remove the target directory
    Clean,
}

/// Installs a stderr subscriber when `MLANG_LOG` holds a filter.
fn init_tracing() {
    if let Ok(filter) = EnvFilter::try_from_env("MLANG_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("tracing initialized");
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::New { name } => commands::new::execute(&name),
        Commands::Init => commands::init::execute(),
        Commands::Build => commands::build::execute(),
        Commands::Check => commands::check::execute(),
        Commands::Clean => commands::clean::execute(),
    }
}
