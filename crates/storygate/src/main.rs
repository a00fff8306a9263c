//! Storygate CLI binary.
//!
//! This binary provides command-line access to Storygate's functionality:
//! - Read a story in the terminal
//! - List the authored paths of a story
//! - Print the scene reached by a path
//! - Check a story document

use clap::Parser;
use std::fs::{self, File};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command-line arguments
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose, cli.command == cli::Commands::Play);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: cli::Cli) -> storygate::StorygateResult<()> {
    use cli::{Commands, handle_check, handle_paths, handle_show, launch_reader, resolve_config};

    let config = resolve_config(&cli)?;

    // Execute the requested command
    match cli.command {
        Commands::Play => launch_reader(&config),
        Commands::Paths {
            max_depth,
            at,
            format,
        } => handle_paths(&config, max_depth, at.as_deref(), format),
        Commands::Show { path } => handle_show(&config, &path),
        Commands::Check => handle_check(&config),
    }
}

/// Install the global subscriber.
///
/// The terminal reader owns the screen, so while playing, logs go to a file
/// in the user's data directory (or nowhere if it cannot be created).
fn init_tracing(verbose: bool, to_file: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if to_file {
        match log_file() {
            Some(file) => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init(),
            None => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init(),
        }
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn log_file() -> Option<File> {
    let dir = dirs::data_local_dir()?.join("storygate");
    fs::create_dir_all(&dir).ok()?;
    File::create(dir.join("storygate.log")).ok()
}
