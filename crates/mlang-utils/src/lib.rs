//! Project configuration for mlang tools.

mod config;

pub use config::{CONFIG_FILE, CheckOptions, Config, Package};
