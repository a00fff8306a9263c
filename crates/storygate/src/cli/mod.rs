//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storygate binary.

mod check;
mod commands;
mod paths;
mod play;
mod settings;
mod show;

pub use check::handle_check;
pub use commands::{Cli, Commands, OutputFormat};
pub use paths::handle_paths;
pub use play::launch_reader;
pub use settings::resolve_config;
pub use show::handle_show;
