//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Storygate - read and inspect branching red/blue stories
#[derive(Parser, Debug)]
#[command(name = "storygate")]
#[command(about = "Read and inspect branching red/blue stories", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to use instead of the layered defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Story document, overriding the configured path
    #[arg(long, global = true)]
    pub story: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Read the story in the terminal
    Play,

    /// List every authored path
    Paths {
        /// Longest path to list
        #[arg(long)]
        max_depth: Option<usize>,

        /// Mark this path as the current one
        #[arg(long)]
        at: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the scene reached by a path
    Show {
        /// Choices made so far, e.g. RBR
        #[arg(long, default_value = "")]
        path: String,
    },

    /// Load the story and report what it contains
    Check,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_flags() {
        let cli = Cli::parse_from([
            "storygate",
            "paths",
            "--max-depth",
            "2",
            "--at",
            "RB",
            "--format",
            "json",
        ]);
        assert_eq!(
            cli.command,
            Commands::Paths {
                max_depth: Some(2),
                at: Some("RB".to_string()),
                format: OutputFormat::Json,
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["storygate", "show", "--story", "other.toml", "-v"]);
        assert_eq!(cli.story, Some(PathBuf::from("other.toml")));
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Commands::Show {
                path: String::new()
            }
        );
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["storygate", "paths", "--format", "xml"]).is_err());
    }
}
